//! Remote archive URL construction.
//!
//! Two URL families on the buildbot: nightly core builds keyed by platform
//! and word width, and frontend asset bundles keyed by item name. Segments
//! are always joined with forward slashes, independent of the host's path
//! separator.

/// `{base}/nightly/{os_family}/{arch}/latest/{core_name}.zip`
pub fn core_url(base: &str, os_family: &str, arch: &str, core_name: &str) -> String {
    format!(
        "{}/nightly/{}/{}/latest/{}.zip",
        base.trim_end_matches('/'),
        os_family,
        arch,
        core_name
    )
}

/// `{base}/assets/frontend/{item_key}.zip`
pub fn asset_url(base: &str, item_key: &str) -> String {
    format!("{}/assets/frontend/{}.zip", base.trim_end_matches('/'), item_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_url_layout() {
        assert_eq!(
            core_url(
                "https://buildbot.libretro.com",
                "windows",
                "x86_64",
                "snes9x_libretro.dll"
            ),
            "https://buildbot.libretro.com/nightly/windows/x86_64/latest/snes9x_libretro.dll.zip"
        );
    }

    #[test]
    fn asset_url_layout() {
        assert_eq!(
            asset_url("https://buildbot.libretro.com", "overlays"),
            "https://buildbot.libretro.com/assets/frontend/overlays.zip"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        assert_eq!(
            asset_url("https://buildbot.libretro.com/", "cheats"),
            "https://buildbot.libretro.com/assets/frontend/cheats.zip"
        );
    }

    #[test]
    fn os_family_with_slash_stays_forward() {
        let url = core_url("https://b", "apple/osx", "x86_64", "core.dylib");
        assert_eq!(url, "https://b/nightly/apple/osx/x86_64/latest/core.dylib.zip");
        assert!(!url.contains('\\'));
    }
}
