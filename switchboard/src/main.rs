use switchboard::{config::DEFAULT_CONFIG_FILE, logging};

fn main() {
    logging::init();

    let invoked = switchboard::run(DEFAULT_CONFIG_FILE);
    tracing::debug!(invoked, "done");
}
