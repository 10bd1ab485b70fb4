fn main() {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("PHASEBENCH_LOG")
        .init();

    if let Err(error) = phasebench::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
