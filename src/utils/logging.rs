use crate::core::domain::Configuration;

// installs the global tracing subscriber; call once at process start
pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(config.max_log_level())
        // disable printing the name of the module in every log line.
        .with_target(false);
    if config.log_json {
        // no ansi colours or timestamps, CloudWatch adds the ingestion time.
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .init();
    } else {
        builder.init();
    }
}
