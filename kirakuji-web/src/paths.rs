//! URLs for static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g. `/kirakuji` on a shared
/// host), generated URLs are prefixed accordingly. Builds without it fall back
/// to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

pub const TRIGGER_IMAGE: &str = "hurt_normal.png";
pub const DRAW_IMAGE: &str = "hurt_dark.png";
pub const CURTAIN_IMAGE: &str = "curtain.png";
pub const OVERLAY_IMAGE: &str = "kirakuji.png";

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_prefixed_without_base() {
        assert_eq!(asset_path_with_base(TRIGGER_IMAGE, ""), "/hurt_normal.png");
        assert_eq!(asset_path_with_base("/curtain.png", ""), "/curtain.png");
    }

    #[test]
    fn prefixed_with_public_base() {
        assert_eq!(
            asset_path_with_base(OVERLAY_IMAGE, "/kirakuji/"),
            "/kirakuji/kirakuji.png"
        );
    }

    #[test]
    fn router_base_trims_or_disables() {
        assert_eq!(router_base_with_base(""), None);
        assert_eq!(router_base_with_base(" / "), None);
        assert_eq!(
            router_base_with_base("/kirakuji/"),
            Some(String::from("/kirakuji"))
        );
    }
}
