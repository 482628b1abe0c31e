//! weaver-header-core: heading block logic without framework dependencies.
//!
//! This crate provides:
//! - `HeadingLevel` and `LevelCatalog` - the configured set of H1..H6 levels
//! - `HeaderConfig` / `EffectiveConfig` - tool settings and their resolution
//! - `HeaderData` and `normalize` - the persisted `{text, level}` shape
//! - `HeaderBlock<P>` - data model, view sync, settings and paste handling,
//!   generic over a `BlockPlatform`
//! - `ToolCapabilities` - static toolbox/conversion/sanitize/paste metadata
//! - `MemoryPlatform` - plain-struct platform for tests and headless hosts

pub mod block;
pub mod catalog;
pub mod config;
pub mod data;
pub mod descriptor;
pub mod error;
pub mod level;
pub mod memory;
pub mod paste;
pub mod platform;
pub mod settings;
pub mod view;


pub use block::HeaderBlock;
pub use catalog::{LevelCatalog, SubTool, SubToolData, get_sub_tools, nearest_level};
pub use config::{EffectiveConfig, HeaderConfig};
pub use data::{HeaderData, HeaderDataPatch, normalize};
pub use descriptor::{
    ConversionConfig, PasteConfig, SanitizeConfig, SanitizeRule, ToolCapabilities,
    ToolDescriptor, Toolbox,
};
pub use error::{ConfigError, HeaderError};
pub use level::{HeadingLevel, IconRef, LevelDescriptor};
pub use memory::{MemoryControl, MemoryElement, MemoryPlatform, MemorySurface};
pub use paste::resolve_paste_level;
pub use platform::{BlockPlatform, HeadingSurface, PastedElement, PlatformError, SettingsControl};
pub use settings::SettingsButton;
pub use smol_str::SmolStr;
pub use view::{ViewState, WRAPPER_CLASS};
