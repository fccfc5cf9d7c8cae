//! Core protocol types shared across the crate.
//!
//! PTP codes are open enumerations: devices routinely report values the
//! client has not registered, and those must round-trip unchanged. Each
//! code space is therefore a thin integer newtype; symbolic names live in
//! the [`crate::registry`] tables, not in the type itself.

macro_rules! code_newtype {
    ($(#[$meta:meta])* $name:ident, $int:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub $int);

        impl $name {
            /// Wrap a raw wire value.
            #[must_use]
            pub const fn new(value: $int) -> Self {
                Self(value)
            }

            /// The raw wire value.
            #[must_use]
            pub const fn raw(self) -> $int {
                self.0
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $int {
            fn from(code: $name) -> $int {
                code.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "(0x{:04X})"), self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "0x{:04X}", self.0)
            }
        }
    };
}

code_newtype! {
    /// Identifies one operation (base range 0x1000-0x1025, vendor 0x9xxx).
    OperationCode, u16
}

code_newtype! {
    /// Identifies one response (base range 0x2000-0x2023, vendor 0xAxxx).
    ResponseCode, u16
}

code_newtype! {
    /// Identifies one asynchronous event (base range 0x4000-0x400E).
    EventCode, u16
}

code_newtype! {
    /// Identifies one device property (base range 0x5001-0x501F, vendor 0xDxxx).
    PropertyCode, u16
}

code_newtype! {
    /// Identifies an object format (ancillary 0x3000s, image 0x3800s).
    ObjectFormatCode, u16
}

code_newtype! {
    /// Identifies a storage filesystem layout.
    FilesystemTypeCode, u16
}

code_newtype! {
    /// Identifies the wire type of an otherwise untyped value payload.
    ///
    /// Scalars are 0x0001-0x000A, arrays add 0x4000, strings are 0xFFFF.
    DataTypeCode, u16
}

impl OperationCode {
    /// Whether this code lives in the vendor-reserved half of the space.
    #[must_use]
    pub const fn is_vendor(self) -> bool {
        self.0 & 0x8000 != 0
    }
}

impl ResponseCode {
    /// Whether this code lives in the vendor-reserved half of the space.
    #[must_use]
    pub const fn is_vendor(self) -> bool {
        self.0 & 0x8000 != 0
    }
}

/// Identifies the vendor extension a device declares in its
/// `DeviceInfo` (e.g. Canon = 0x0B). 32 bits on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VendorExtensionId(pub u32);

impl VendorExtensionId {
    /// Wrap a raw wire value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw wire value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for VendorExtensionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for VendorExtensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VendorExtensionId(0x{:08X})", self.0)
    }
}

impl std::fmt::Display for VendorExtensionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Wildcard used by several operations to mean "all" or "root".
pub const ALL: u32 = 0xFFFF_FFFF;
