use intro::{EchoInput, StaticGreeting};
use kobold_lite::ROOT;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    // Both views go into the same container, the second one replaces the first.
    let mounted = kobold_lite::start_at(ROOT, StaticGreeting.render())
        .and_then(|()| kobold_lite::start_at(ROOT, EchoInput.render()));

    if let Err(err) = mounted {
        log::error!("failed to mount: {err}");
    }
}
