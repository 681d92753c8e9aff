//! Package manager definitions, host probing, and invocation.
//!
//! # Modules
//!
//! - [`defs`] - The closed set of supported managers and their metadata
//! - [`probe`] - Host capability detection
//! - [`invoke`] - The probe/install invocation contract and real adapter

pub mod defs;
pub mod invoke;
pub mod probe;

pub use defs::{platform_priority, ManagerDef, PackageManagerId, Platform};
pub use invoke::{InstallResult, ManagerInvoker, ShellInvoker};
pub use probe::{HostCapabilities, HostProbe, ManagerStatus};
