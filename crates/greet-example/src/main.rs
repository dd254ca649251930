fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match greet_example::app().build() {
        Ok(mut app) => app.run(std::env::args()),
        Err(e) => {
            eprintln!("fatal: {}", e);
            std::process::exit(subverb::FATAL);
        }
    }
}
