//! The code registry: open enumerations composed from base tables plus
//! ordered vendor overlays.
//!
//! Composition happens once, at connection setup, through
//! [`CodeRegistry::builder`]; the resulting tables are immutable for the
//! lifetime of the engine that owns them. Resolution is bidirectional:
//! names become integers when building requests, integers become names
//! when interpreting responses and events. An integer with no name is
//! never an error - devices routinely report codes the client has not
//! registered, and they must round-trip unchanged.

use std::collections::HashMap;

use crate::error::PtpError;
use crate::types::{
    DataTypeCode, EventCode, FilesystemTypeCode, ObjectFormatCode, OperationCode, PropertyCode,
    ResponseCode, VendorExtensionId,
};

pub mod codes;

#[cfg(test)]
mod tests;

/// The seven extensible code spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSpace {
    /// Operation codes (requests)
    Operation,
    /// Response codes (results)
    Response,
    /// Event codes (notifications)
    Event,
    /// Device property codes
    Property,
    /// Object format codes
    ObjectFormat,
    /// Storage filesystem type codes
    FilesystemType,
    /// Value wire-type codes
    DataType,
}

impl CodeSpace {
    /// All spaces, in table order.
    pub const ALL: [CodeSpace; 7] = [
        CodeSpace::Operation,
        CodeSpace::Response,
        CodeSpace::Event,
        CodeSpace::Property,
        CodeSpace::ObjectFormat,
        CodeSpace::FilesystemType,
        CodeSpace::DataType,
    ];

    const fn index(self) -> usize {
        match self {
            CodeSpace::Operation => 0,
            CodeSpace::Response => 1,
            CodeSpace::Event => 2,
            CodeSpace::Property => 3,
            CodeSpace::ObjectFormat => 4,
            CodeSpace::FilesystemType => 5,
            CodeSpace::DataType => 6,
        }
    }

    const fn base_table(self) -> &'static [(&'static str, u16)] {
        match self {
            CodeSpace::Operation => codes::OPERATION_NAMES,
            CodeSpace::Response => codes::RESPONSE_NAMES,
            CodeSpace::Event => codes::EVENT_NAMES,
            CodeSpace::Property => codes::PROPERTY_NAMES,
            CodeSpace::ObjectFormat => codes::FORMAT_NAMES,
            CodeSpace::FilesystemType => codes::FILESYSTEM_NAMES,
            CodeSpace::DataType => codes::DATATYPE_NAMES,
        }
    }
}

/// A code given either by symbolic name or by raw integer.
///
/// Any operation argument that names a property, format, or similar can
/// be supplied both ways. Names must resolve in the composed tables;
/// integers always pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeRef<'a> {
    /// A symbolic name, e.g. `"BatteryLevel"`
    Name(&'a str),
    /// A raw wire value, e.g. `0x5001`
    Value(u16),
}

impl<'a> From<&'a str> for CodeRef<'a> {
    fn from(name: &'a str) -> Self {
        CodeRef::Name(name)
    }
}

impl From<u16> for CodeRef<'_> {
    fn from(value: u16) -> Self {
        CodeRef::Value(value)
    }
}

macro_rules! code_ref_from {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for CodeRef<'_> {
                fn from(code: $ty) -> Self {
                    CodeRef::Value(code.raw())
                }
            }
        )*
    };
}

code_ref_from!(
    OperationCode,
    ResponseCode,
    EventCode,
    PropertyCode,
    ObjectFormatCode,
    FilesystemTypeCode,
    DataTypeCode
);

/// A vendor extension given by name or by its 32-bit registered ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionRef<'a> {
    /// A registered name, e.g. `"Canon"`
    Name(&'a str),
    /// A raw extension ID, e.g. `0x0000000B`
    Value(u32),
}

impl<'a> From<&'a str> for ExtensionRef<'a> {
    fn from(name: &'a str) -> Self {
        ExtensionRef::Name(name)
    }
}

impl From<u32> for ExtensionRef<'_> {
    fn from(value: u32) -> Self {
        ExtensionRef::Value(value)
    }
}

impl From<VendorExtensionId> for ExtensionRef<'_> {
    fn from(id: VendorExtensionId) -> Self {
        ExtensionRef::Value(id.raw())
    }
}

/// A set of additional code-space entries contributed by one vendor
/// extension.
///
/// Overlays are pure data; behavior extensions hang off
/// [`crate::SessionHook`] instead. Entries are applied in registration
/// order, later overlays winning integer collisions within a space.
pub trait CodeOverlay: Send + Sync {
    /// Human-readable overlay name, e.g. `"Canon"`.
    fn name(&self) -> &'static str;

    /// The extension ID devices declare to select this overlay, if any.
    fn vendor_extension_id(&self) -> Option<VendorExtensionId> {
        None
    }

    /// Entries this overlay contributes to `space`.
    fn entries(&self, space: CodeSpace) -> &'static [(&'static str, u16)] {
        let _ = space;
        &[]
    }
}

#[derive(Debug, Default, Clone)]
struct CodeTable {
    by_name: HashMap<&'static str, u16>,
    by_value: HashMap<u16, &'static str>,
}

impl CodeTable {
    fn insert(&mut self, name: &'static str, value: u16) {
        self.by_name.insert(name, value);
        self.by_value.insert(value, name);
    }
}

/// Builds a [`CodeRegistry`] from the base tables plus ordered overlays.
#[derive(Debug, Clone)]
pub struct CodeRegistryBuilder {
    tables: [CodeTable; 7],
    overlay_names: Vec<&'static str>,
}

impl CodeRegistryBuilder {
    fn new() -> Self {
        let mut tables: [CodeTable; 7] = Default::default();
        for space in CodeSpace::ALL {
            let table = &mut tables[space.index()];
            for &(name, value) in space.base_table() {
                table.insert(name, value);
            }
        }
        Self {
            tables,
            overlay_names: Vec::new(),
        }
    }

    /// Apply `overlay` on top of everything applied so far.
    #[must_use]
    pub fn overlay(mut self, overlay: &dyn CodeOverlay) -> Self {
        tracing::debug!(overlay = overlay.name(), "applying code overlay");
        for space in CodeSpace::ALL {
            let table = &mut self.tables[space.index()];
            for &(name, value) in overlay.entries(space) {
                table.insert(name, value);
            }
        }
        self.overlay_names.push(overlay.name());
        self
    }

    /// Freeze the composed tables.
    #[must_use]
    pub fn build(self) -> CodeRegistry {
        CodeRegistry {
            tables: self.tables,
            overlay_names: self.overlay_names,
        }
    }
}

/// Immutable composed symbol tables for all code spaces.
#[derive(Debug, Clone)]
pub struct CodeRegistry {
    tables: [CodeTable; 7],
    overlay_names: Vec<&'static str>,
}

impl CodeRegistry {
    /// Start composing: base tables, then overlays in call order.
    #[must_use]
    pub fn builder() -> CodeRegistryBuilder {
        CodeRegistryBuilder::new()
    }

    /// The base tables with no overlays applied.
    #[must_use]
    pub fn base() -> Self {
        Self::builder().build()
    }

    /// Names of the overlays applied, in order.
    #[must_use]
    pub fn overlay_names(&self) -> &[&'static str] {
        &self.overlay_names
    }

    /// The symbolic name for `value` in `space`, if one is registered.
    #[must_use]
    pub fn name_of(&self, space: CodeSpace, value: u16) -> Option<&'static str> {
        self.tables[space.index()].by_value.get(&value).copied()
    }

    /// The integer registered for `name` in `space`, if any.
    #[must_use]
    pub fn value_of(&self, space: CodeSpace, name: &str) -> Option<u16> {
        self.tables[space.index()].by_name.get(name).copied()
    }

    /// Resolve a name-or-code argument to its wire value.
    ///
    /// Integers pass through unconditionally, registered or not.
    ///
    /// # Errors
    ///
    /// Returns [`PtpError::UnknownName`] for a name absent from the
    /// composed tables; nothing is sent to the device in that case.
    pub fn resolve(&self, space: CodeSpace, code: CodeRef<'_>) -> Result<u16, PtpError> {
        match code {
            CodeRef::Value(value) => Ok(value),
            CodeRef::Name(name) => {
                self.value_of(space, name)
                    .ok_or_else(|| PtpError::UnknownName {
                        space,
                        name: name.to_string(),
                    })
            }
        }
    }

    /// Resolve a vendor extension reference to its 32-bit ID.
    ///
    /// # Errors
    ///
    /// Returns [`PtpError::UnknownName`] for an unregistered name.
    pub fn resolve_extension(&self, ext: ExtensionRef<'_>) -> Result<u32, PtpError> {
        match ext {
            ExtensionRef::Value(value) => Ok(value),
            ExtensionRef::Name(name) => codes::EXTENSION_NAMES
                .iter()
                .find(|&&(n, _)| n == name)
                .map(|&(_, v)| v)
                .ok_or_else(|| PtpError::UnknownName {
                    space: CodeSpace::Operation,
                    name: name.to_string(),
                }),
        }
    }

    /// The registered name for a vendor extension ID, if any.
    #[must_use]
    pub fn extension_name(id: VendorExtensionId) -> Option<&'static str> {
        codes::EXTENSION_NAMES
            .iter()
            .find(|&&(_, v)| v == id.raw())
            .map(|&(n, _)| n)
    }

    /// Human-readable rendering of a code: `"GetDeviceInfo (0x1001)"` when
    /// registered, bare hex otherwise.
    #[must_use]
    pub fn describe(&self, space: CodeSpace, value: u16) -> String {
        match self.name_of(space, value) {
            Some(name) => format!("{name} (0x{value:04X})"),
            None => format!("0x{value:04X}"),
        }
    }
}

impl Default for CodeRegistry {
    fn default() -> Self {
        Self::base()
    }
}
