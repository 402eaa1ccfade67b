use std::io;

use clap::Parser;
use hibp_checker::cli::{Session, TerminalInput};
use hibp_checker::{Args, Error, logging, server};
use hibp_range::BreachChecker;
use tokio::net::TcpListener;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    logging::init(&args.log_dir, &args.log_level)?;

    let checker = BreachChecker::new(args.http_client()?, args.base_url.clone());

    let addr = args.listen_addr();
    let listener = TcpListener::bind(addr).await.map_err(|source| Error::Bind { addr, source })?;
    let server_task = tokio::spawn(server::serve(listener, checker.clone(), args.debug));

    if args.no_interactive {
        server_task.await??;
        return Ok(());
    }

    // The prompt blocks on the terminal, so it gets a plain thread rather than
    // a blocking task; returning from main must not wait for it.
    let session = Session::new(checker, args.debug);
    let handle = Handle::current();
    let (done_tx, done_rx) = oneshot::channel();
    std::thread::spawn(move || {
        let result = session.run(&handle, &mut TerminalInput, &mut io::stdout().lock());
        let _ = done_tx.send(result);
    });

    hibp_checker::app::supervise(done_rx, server_task).await
}
