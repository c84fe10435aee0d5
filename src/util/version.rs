pub const APP_NAME: &str = "Sole & Ankh";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version shown in the window title: the git tag when built from one.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

pub fn window_title() -> String {
    format!("{} {}", APP_NAME, version_label())
}
