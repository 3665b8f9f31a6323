#[cfg(target_os = "android")]
pub fn init() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(crate::constants::LOG_TAG),
    );
}

/// `RUST_LOG` overrides the default `info` filter.
#[cfg(not(target_os = "android"))]
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
