//! Package manager definitions.
//!
//! The set of supported package managers is a closed enum. The registry
//! only supplies data keyed by these identifiers; it cannot introduce new
//! managers, so a typo in a registry file fails at load time rather than
//! at install time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform for manager and install resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOS => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

/// Identifier for a supported package manager.
///
/// Serialized in lowercase; these are the keys used in the registry's
/// `install_names` mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerId {
    Brew,
    Macports,
    Apt,
    Dnf,
    Pacman,
    Zypper,
    Winget,
    Scoop,
    Chocolatey,
    Pixi,
    Pip,
}

/// Static metadata for one package manager.
pub struct ManagerDef {
    pub id: PackageManagerId,
    /// Executable names that invoke this manager, in lookup order.
    pub command_names: &'static [&'static str],
    /// Platforms where this manager applies. Probing skips it elsewhere.
    pub platforms: &'static [Platform],
    /// Trivial no-op invocation used as the probe.
    pub version_command: &'static str,
    /// Project homepage.
    pub url: &'static str,
    /// Where to get the manager itself (None for core OS components).
    pub install_url: Option<&'static str>,
}

impl ManagerDef {
    /// Build the install command for a package identifier.
    pub fn install_command(&self, package: &str) -> String {
        match self.id {
            PackageManagerId::Brew => format!("brew install {package}"),
            PackageManagerId::Macports => format!("sudo port install {package}"),
            PackageManagerId::Apt => format!("sudo apt-get install -y {package}"),
            PackageManagerId::Dnf => format!("sudo dnf install -y {package}"),
            PackageManagerId::Pacman => format!("sudo pacman -S --noconfirm {package}"),
            PackageManagerId::Zypper => {
                format!("sudo zypper install --non-interactive {package}")
            }
            PackageManagerId::Winget => format!("winget install {package}"),
            PackageManagerId::Scoop => format!("scoop install {package}"),
            PackageManagerId::Chocolatey => format!("choco install {package} -y"),
            PackageManagerId::Pixi => format!("pixi global install {package}"),
            PackageManagerId::Pip => format!("pip install {package}"),
        }
    }

    /// Whether this manager applies to the given platform.
    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

/// The full definition table.
static MANAGER_DEFS: &[ManagerDef] = &[
    ManagerDef {
        id: PackageManagerId::Brew,
        command_names: &["brew"],
        platforms: &[Platform::MacOS, Platform::Linux],
        version_command: "brew --version",
        url: "https://github.com/Homebrew/brew",
        install_url: Some("https://brew.sh/"),
    },
    ManagerDef {
        id: PackageManagerId::Macports,
        command_names: &["port"],
        platforms: &[Platform::MacOS],
        version_command: "port version",
        url: "https://macports.org/",
        install_url: Some("https://macports.org/install.php"),
    },
    ManagerDef {
        id: PackageManagerId::Apt,
        command_names: &["apt-get", "apt"],
        platforms: &[Platform::Linux],
        version_command: "apt-get --version",
        url: "https://wiki.debian.org/Apt",
        install_url: None,
    },
    ManagerDef {
        id: PackageManagerId::Dnf,
        command_names: &["dnf"],
        platforms: &[Platform::Linux],
        version_command: "dnf --version",
        url: "https://github.com/rpm-software-management/dnf",
        install_url: None,
    },
    ManagerDef {
        id: PackageManagerId::Pacman,
        command_names: &["pacman"],
        platforms: &[Platform::Linux],
        version_command: "pacman --version",
        url: "https://archlinux.org/pacman/",
        install_url: None,
    },
    ManagerDef {
        id: PackageManagerId::Zypper,
        command_names: &["zypper"],
        platforms: &[Platform::Linux],
        version_command: "zypper --version",
        url: "https://github.com/openSUSE/zypper",
        install_url: None,
    },
    ManagerDef {
        id: PackageManagerId::Winget,
        command_names: &["winget"],
        platforms: &[Platform::Windows],
        version_command: "winget --version",
        url: "https://github.com/microsoft/winget-cli",
        install_url: Some("https://apps.microsoft.com/detail/9nblggh4nns1"),
    },
    ManagerDef {
        id: PackageManagerId::Scoop,
        command_names: &["scoop"],
        platforms: &[Platform::Windows],
        version_command: "scoop --version",
        url: "https://github.com/ScoopInstaller/Scoop",
        install_url: Some("https://scoop.sh/"),
    },
    ManagerDef {
        id: PackageManagerId::Chocolatey,
        command_names: &["choco"],
        platforms: &[Platform::Windows],
        version_command: "choco --version",
        url: "https://chocolatey.org/",
        install_url: Some("https://chocolatey.org/install"),
    },
    ManagerDef {
        id: PackageManagerId::Pixi,
        command_names: &["pixi"],
        platforms: &[Platform::MacOS, Platform::Linux, Platform::Windows],
        version_command: "pixi --version",
        url: "https://github.com/prefix-dev/pixi",
        install_url: Some("https://pixi.sh/latest/"),
    },
    ManagerDef {
        id: PackageManagerId::Pip,
        command_names: &["pip", "pip3"],
        platforms: &[Platform::MacOS, Platform::Linux, Platform::Windows],
        version_command: "pip --version",
        url: "https://github.com/pypa/pip",
        install_url: Some("https://pip.pypa.io/en/stable/installation/"),
    },
];

impl PackageManagerId {
    /// All known managers.
    pub fn all() -> impl Iterator<Item = PackageManagerId> {
        MANAGER_DEFS.iter().map(|d| d.id)
    }

    /// Static metadata for this manager.
    pub fn def(self) -> &'static ManagerDef {
        MANAGER_DEFS
            .iter()
            .find(|d| d.id == self)
            .expect("every PackageManagerId has a definition")
    }

    /// Lowercase identifier, matching the registry key form.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageManagerId::Brew => "brew",
            PackageManagerId::Macports => "macports",
            PackageManagerId::Apt => "apt",
            PackageManagerId::Dnf => "dnf",
            PackageManagerId::Pacman => "pacman",
            PackageManagerId::Zypper => "zypper",
            PackageManagerId::Winget => "winget",
            PackageManagerId::Scoop => "scoop",
            PackageManagerId::Chocolatey => "chocolatey",
            PackageManagerId::Pixi => "pixi",
            PackageManagerId::Pip => "pip",
        }
    }
}

impl fmt::Display for PackageManagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManagerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageManagerId::all()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown package manager: {s}"))
    }
}

/// Fixed priority order of managers for a platform.
///
/// Native system managers rank before cross-platform installers on
/// Unix-likes; on Windows the cross-platform installer ranks first. pip is
/// last everywhere: a language-level installer is the weakest fit for
/// system tools.
pub fn platform_priority(platform: Platform) -> &'static [PackageManagerId] {
    match platform {
        Platform::MacOS => &[
            PackageManagerId::Brew,
            PackageManagerId::Macports,
            PackageManagerId::Pixi,
            PackageManagerId::Pip,
        ],
        Platform::Linux => &[
            PackageManagerId::Apt,
            PackageManagerId::Dnf,
            PackageManagerId::Pacman,
            PackageManagerId::Zypper,
            PackageManagerId::Brew,
            PackageManagerId::Pixi,
            PackageManagerId::Pip,
        ],
        Platform::Windows => &[
            PackageManagerId::Pixi,
            PackageManagerId::Winget,
            PackageManagerId::Scoop,
            PackageManagerId::Chocolatey,
            PackageManagerId::Pip,
        ],
    }
}
