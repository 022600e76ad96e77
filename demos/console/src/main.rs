use std::io;

use castlehunt::prelude::*;

fn main() -> Result<(), HuntError> {
    // Warnings only unless RUST_LOG says otherwise.
    init_logging("warn");

    let graph = CastleLayout::default().build()?;
    let session = GameSession::new(graph, SessionConfig::default())?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    ConsoleGame::new(session, stdin, stdout).run()?;
    Ok(())
}
