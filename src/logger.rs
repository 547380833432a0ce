use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        init_stderr_logger();
        log::warn!("Unable to load {}, logging warnings to stderr: {}", CONFIG_FILE, e);
    }
}

fn init_stderr_logger() {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Unable to install stderr logger: {}", e);
            }
        }
        Err(e) => eprintln!("Invalid stderr logger configuration: {}", e),
    }
}
