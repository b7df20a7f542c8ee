//! Filename classifier for release assets.
//!
//! All matching is case-insensitive substring search over the raw asset
//! name. The rule tables are ordered and the first matching entry wins,
//! so overlapping tokens (`x86_64` contains `x86`) resolve to the more
//! specific group as long as it is listed first.

/// File extension tokens recognized by the classifier.
const SIG: &str = ".sig";
const DMG: &str = ".dmg";
const APPIMAGE: &str = ".appimage";
const DEB: &str = ".deb";
const RPM: &str = ".rpm";
const MSI: &str = ".msi";
const EXE: &str = ".exe";
const APP_BUNDLE: &str = ".app.tar.gz";
const TAR: &str = ".tar";
const ZIP: &str = ".zip";

/// Target operating system family of a built artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    Android,
    Ios,
    Unknown,
    SourceArchive,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Unknown => "Unknown",
            Platform::SourceArchive => "Source archive",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Platform::Linux => "\u{1F427}",
            Platform::Windows => "\u{1FA9F}",
            Platform::MacOs => "\u{1F34E}",
            Platform::Unknown => "\u{2753}",
            Platform::SourceArchive => "\u{1F4C1}",
            Platform::Android | Platform::Ios => "",
        }
    }
}

/// Fixed display order for the download tables. Platforms not listed
/// here are never rendered.
pub const PLATFORM_ORDER: [Platform; 5] = [
    Platform::Linux,
    Platform::Windows,
    Platform::MacOs,
    Platform::Unknown,
    Platform::SourceArchive,
];

/// Packaging category of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Executable,
    AppImage,
    Installer,
    Bundle,
    Archive,
    Instructions,
}

/// Result of classifying a single asset filename.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub platform: Platform,
    pub architecture: String,
    pub kind: AssetKind,
}

/// Explicit OS keywords, checked before any extension inference.
const PLATFORM_KEYWORDS: &[(&[&str], Platform)] = &[
    (&["linux"], Platform::Linux),
    (&["darwin", "macos"], Platform::MacOs),
    (&["windows", "win"], Platform::Windows),
    (&["android"], Platform::Android),
    (&["ios"], Platform::Ios),
];

/// Extension-based platform inference, consulted only when no OS keyword
/// matched.
const PLATFORM_EXTENSIONS: &[(&[&str], Platform)] = &[
    (&[DMG, APP_BUNDLE], Platform::MacOs),
    (&[APPIMAGE, DEB, RPM], Platform::Linux),
    (&[EXE, MSI], Platform::Windows),
];

/// One architecture token group.
///
/// `token` is the raw architecture text shown in labels; `mac` is the
/// human-readable CPU name used on macOS assets instead, where the
/// packaging suffix (DMG/Bundle/Binary) is chosen by extension.
struct ArchRule {
    aliases: &'static [&'static str],
    token: &'static str,
    mac: Option<&'static str>,
}

/// Architecture groups in match order. The x64 group must precede the
/// x86 group or `x86_64` names would resolve to the wrong aliases.
const ARCH_RULES: &[ArchRule] = &[
    ArchRule {
        aliases: &["x86_64", "amd64", "x64"],
        token: "x86_64",
        mac: Some("Intel"),
    },
    ArchRule {
        aliases: &["aarch64", "arm64"],
        token: "aarch64",
        mac: Some("Silicon"),
    },
    ArchRule {
        aliases: &["arm32", "armv7"],
        token: "arm32",
        mac: None,
    },
    ArchRule {
        aliases: &["arm"],
        token: "arm",
        mac: None,
    },
    ArchRule {
        aliases: &["i386", "x86"],
        token: "x86",
        mac: None,
    },
];

/// Kind rules in priority order; anything unmatched is an archive.
const KIND_RULES: &[(&[&str], AssetKind)] = &[
    (&[EXE], AssetKind::Executable),
    (&[MSI, DEB, RPM], AssetKind::Installer),
    (&[DMG, APP_BUNDLE], AssetKind::Bundle),
    (&[APPIMAGE], AssetKind::AppImage),
];

/// Display names keyed on explicit extension tokens, in priority order.
/// `.app.tar.gz` must be listed before the bare `.tar` token.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    (DMG, "DMG Installer"),
    (APPIMAGE, "AppImage"),
    (DEB, "DEB Package"),
    (RPM, "RPM Package"),
    (MSI, "MSI Installer"),
    (EXE, "Executable"),
    (APP_BUNDLE, "macOS App Bundle"),
    (TAR, "TAR Archive"),
    (ZIP, "ZIP Archive"),
];

pub fn is_signature(name: &str) -> bool {
    name.to_lowercase().ends_with(SIG)
}

fn contains_any(name: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| name.contains(t))
}

fn float_right(main: &str, floated: &str) -> String {
    format!("{main} <span style='float: right;'>{floated}</span>")
}

/// Classify a raw asset filename into platform, architecture label and
/// packaging kind. Never fails: unrecognized names fall back to
/// `Unknown` / empty label / archive.
pub fn classify(asset_name: &str) -> Classification {
    let name = asset_name.to_lowercase();

    let platform = PLATFORM_KEYWORDS
        .iter()
        .chain(PLATFORM_EXTENSIONS.iter())
        .find(|(tokens, _)| contains_any(&name, tokens))
        .map(|(_, platform)| *platform)
        .unwrap_or(Platform::Unknown);

    let architecture = architecture_label(&name, platform);

    let kind = KIND_RULES
        .iter()
        .find(|(tokens, _)| contains_any(&name, tokens))
        .map(|(_, kind)| *kind)
        .unwrap_or(AssetKind::Archive);

    Classification {
        platform,
        architecture,
        kind,
    }
}

fn architecture_label(name: &str, platform: Platform) -> String {
    let Some(rule) = ARCH_RULES
        .iter()
        .find(|rule| contains_any(name, rule.aliases))
    else {
        return String::new();
    };

    if platform == Platform::MacOs {
        if let Some(mac) = rule.mac {
            let packaging = if name.contains(DMG) {
                "DMG"
            } else if name.contains(APP_BUNDLE) {
                "Bundle"
            } else {
                "Binary"
            };
            return float_right(mac, packaging);
        }
    }

    // Other platforms carry the packaging format after the raw token
    if name.contains(APPIMAGE) {
        float_right(rule.token, "AppImage")
    } else if name.contains(DEB) {
        float_right(rule.token, "Debian")
    } else if name.contains(TAR) {
        float_right(rule.token, "Binary")
    } else {
        rule.token.to_string()
    }
}

/// Human-readable name for a download row. Falls back to a generic
/// label keyed on the classified kind, and to the raw filename for
/// instructions-only entries.
pub fn display_name(asset_name: &str, kind: AssetKind) -> String {
    let name = asset_name.to_lowercase();

    if let Some((_, label)) = DISPLAY_NAMES.iter().find(|(token, _)| name.contains(token)) {
        return (*label).to_string();
    }

    match kind {
        AssetKind::Executable => "Executable".to_string(),
        AssetKind::Installer => "Installer".to_string(),
        AssetKind::Bundle => "Bundle".to_string(),
        AssetKind::AppImage => "AppImage".to_string(),
        AssetKind::Archive => "Archive".to_string(),
        AssetKind::Instructions => asset_name.to_string(),
    }
}
