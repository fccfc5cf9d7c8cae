//! Base code tables for every code space (ISO 15740 §10).
//!
//! These are data, not logic: each macro invocation yields a module of
//! named constants plus the name table the [`crate::CodeRegistry`] seeds
//! itself from. Vendor overlays contribute additional `(name, value)`
//! entries through [`crate::CodeOverlay`].

macro_rules! code_tables {
    (
        $(#[$mod_meta:meta])*
        pub mod $mod_name:ident : $code_ty:ident, $table:ident {
            $($sym:ident = $val:literal => $const_name:ident),* $(,)?
        }
    ) => {
        $(#[$mod_meta])*
        pub mod $mod_name {
            use crate::types::$code_ty;
            $(
                #[doc = concat!("`", stringify!($sym), "`")]
                pub const $const_name: $code_ty = $code_ty($val);
            )*
        }

        #[doc = concat!("Base name table for [`", stringify!($mod_name), "`].")]
        pub static $table: &[(&str, u16)] = &[
            $((stringify!($sym), $val)),*
        ];
    };
}

code_tables! {
    /// Operation codes, base range 0x1000-0x1025.
    pub mod operations: OperationCode, OPERATION_NAMES {
        Undefined = 0x1000 => UNDEFINED,
        GetDeviceInfo = 0x1001 => GET_DEVICE_INFO,
        OpenSession = 0x1002 => OPEN_SESSION,
        CloseSession = 0x1003 => CLOSE_SESSION,
        GetStorageIDs = 0x1004 => GET_STORAGE_IDS,
        GetStorageInfo = 0x1005 => GET_STORAGE_INFO,
        GetNumObjects = 0x1006 => GET_NUM_OBJECTS,
        GetObjectHandles = 0x1007 => GET_OBJECT_HANDLES,
        GetObjectInfo = 0x1008 => GET_OBJECT_INFO,
        GetObject = 0x1009 => GET_OBJECT,
        GetThumb = 0x100A => GET_THUMB,
        DeleteObject = 0x100B => DELETE_OBJECT,
        SendObjectInfo = 0x100C => SEND_OBJECT_INFO,
        SendObject = 0x100D => SEND_OBJECT,
        InitiateCapture = 0x100E => INITIATE_CAPTURE,
        FormatStore = 0x100F => FORMAT_STORE,
        ResetDevice = 0x1010 => RESET_DEVICE,
        SelfTest = 0x1011 => SELF_TEST,
        SetObjectProtection = 0x1012 => SET_OBJECT_PROTECTION,
        PowerDown = 0x1013 => POWER_DOWN,
        GetDevicePropDesc = 0x1014 => GET_DEVICE_PROP_DESC,
        GetDevicePropValue = 0x1015 => GET_DEVICE_PROP_VALUE,
        SetDevicePropValue = 0x1016 => SET_DEVICE_PROP_VALUE,
        ResetDevicePropValue = 0x1017 => RESET_DEVICE_PROP_VALUE,
        TerminateOpenCapture = 0x1018 => TERMINATE_OPEN_CAPTURE,
        MoveObject = 0x1019 => MOVE_OBJECT,
        CopyObject = 0x101A => COPY_OBJECT,
        GetPartialObject = 0x101B => GET_PARTIAL_OBJECT,
        InitiateOpenCapture = 0x101C => INITIATE_OPEN_CAPTURE,
        StartEnumHandles = 0x101D => START_ENUM_HANDLES,
        EnumHandles = 0x101E => ENUM_HANDLES,
        StopEnumHandles = 0x101F => STOP_ENUM_HANDLES,
        GetVendorExtensionMaps = 0x1020 => GET_VENDOR_EXTENSION_MAPS,
        GetVendorDeviceInfo = 0x1021 => GET_VENDOR_DEVICE_INFO,
        GetResizedImageObject = 0x1022 => GET_RESIZED_IMAGE_OBJECT,
        GetFilesystemManifest = 0x1023 => GET_FILESYSTEM_MANIFEST,
        GetStreamInfo = 0x1024 => GET_STREAM_INFO,
        GetStream = 0x1025 => GET_STREAM,
    }
}

code_tables! {
    /// Response codes, base range 0x2000-0x2023.
    pub mod responses: ResponseCode, RESPONSE_NAMES {
        Undefined = 0x2000 => UNDEFINED,
        OK = 0x2001 => OK,
        GeneralError = 0x2002 => GENERAL_ERROR,
        SessionNotOpen = 0x2003 => SESSION_NOT_OPEN,
        InvalidTransactionID = 0x2004 => INVALID_TRANSACTION_ID,
        OperationNotSupported = 0x2005 => OPERATION_NOT_SUPPORTED,
        ParameterNotSupported = 0x2006 => PARAMETER_NOT_SUPPORTED,
        IncompleteTransfer = 0x2007 => INCOMPLETE_TRANSFER,
        InvalidStorageId = 0x2008 => INVALID_STORAGE_ID,
        InvalidObjectHandle = 0x2009 => INVALID_OBJECT_HANDLE,
        DevicePropNotSupported = 0x200A => DEVICE_PROP_NOT_SUPPORTED,
        InvalidObjectFormatCode = 0x200B => INVALID_OBJECT_FORMAT_CODE,
        StoreFull = 0x200C => STORE_FULL,
        ObjectWriteProtected = 0x200D => OBJECT_WRITE_PROTECTED,
        StoreReadOnly = 0x200E => STORE_READ_ONLY,
        AccessDenied = 0x200F => ACCESS_DENIED,
        NoThumbnailPresent = 0x2010 => NO_THUMBNAIL_PRESENT,
        SelfTestFailed = 0x2011 => SELF_TEST_FAILED,
        PartialDeletion = 0x2012 => PARTIAL_DELETION,
        StoreNotAvailable = 0x2013 => STORE_NOT_AVAILABLE,
        SpecificationByFormatUnsupported = 0x2014 => SPECIFICATION_BY_FORMAT_UNSUPPORTED,
        NoValidObjectInfo = 0x2015 => NO_VALID_OBJECT_INFO,
        InvalidCodeFormat = 0x2016 => INVALID_CODE_FORMAT,
        UnknownVendorCode = 0x2017 => UNKNOWN_VENDOR_CODE,
        CaptureAlreadyTerminated = 0x2018 => CAPTURE_ALREADY_TERMINATED,
        DeviceBusy = 0x2019 => DEVICE_BUSY,
        InvalidParentObject = 0x201A => INVALID_PARENT_OBJECT,
        InvalidDevicePropFormat = 0x201B => INVALID_DEVICE_PROP_FORMAT,
        InvalidDevicePropValue = 0x201C => INVALID_DEVICE_PROP_VALUE,
        InvalidParameter = 0x201D => INVALID_PARAMETER,
        SessionAlreadyOpened = 0x201E => SESSION_ALREADY_OPENED,
        TransactionCanceled = 0x201F => TRANSACTION_CANCELED,
        SpecificationOfDestinationUnsupported = 0x2020 => SPECIFICATION_OF_DESTINATION_UNSUPPORTED,
        InvalidEnumHandle = 0x2021 => INVALID_ENUM_HANDLE,
        NoStreamEnabled = 0x2022 => NO_STREAM_ENABLED,
        InvalidDataset = 0x2023 => INVALID_DATASET,
    }
}

code_tables! {
    /// Event codes, base range 0x4000-0x400E.
    pub mod events: EventCode, EVENT_NAMES {
        Undefined = 0x4000 => UNDEFINED,
        CancelTransaction = 0x4001 => CANCEL_TRANSACTION,
        ObjectAdded = 0x4002 => OBJECT_ADDED,
        ObjectRemoved = 0x4003 => OBJECT_REMOVED,
        StoreAdded = 0x4004 => STORE_ADDED,
        StoreRemoved = 0x4005 => STORE_REMOVED,
        DevicePropChanged = 0x4006 => DEVICE_PROP_CHANGED,
        ObjectInfoChanged = 0x4007 => OBJECT_INFO_CHANGED,
        DeviceInfoChanged = 0x4008 => DEVICE_INFO_CHANGED,
        RequestObjectTransfer = 0x4009 => REQUEST_OBJECT_TRANSFER,
        StoreFull = 0x400A => STORE_FULL,
        DeviceReset = 0x400B => DEVICE_RESET,
        StorageInfoChanged = 0x400C => STORAGE_INFO_CHANGED,
        CaptureComplete = 0x400D => CAPTURE_COMPLETE,
        UnreportedStatus = 0x400E => UNREPORTED_STATUS,
    }
}

code_tables! {
    /// Device property codes, base range 0x5001-0x501F.
    pub mod properties: PropertyCode, PROPERTY_NAMES {
        Undefined = 0x5000 => UNDEFINED,
        BatteryLevel = 0x5001 => BATTERY_LEVEL,
        FunctionalMode = 0x5002 => FUNCTIONAL_MODE,
        ImageSize = 0x5003 => IMAGE_SIZE,
        CompressionSetting = 0x5004 => COMPRESSION_SETTING,
        WhiteBalance = 0x5005 => WHITE_BALANCE,
        RGBGain = 0x5006 => RGB_GAIN,
        FNumber = 0x5007 => F_NUMBER,
        FocalLength = 0x5008 => FOCAL_LENGTH,
        FocusDistance = 0x5009 => FOCUS_DISTANCE,
        FocusMode = 0x500A => FOCUS_MODE,
        ExposureMeteringMode = 0x500B => EXPOSURE_METERING_MODE,
        FlashMode = 0x500C => FLASH_MODE,
        ExposureTime = 0x500D => EXPOSURE_TIME,
        ExposureProgramMode = 0x500E => EXPOSURE_PROGRAM_MODE,
        ExposureIndex = 0x500F => EXPOSURE_INDEX,
        ExposureBiasCompensation = 0x5010 => EXPOSURE_BIAS_COMPENSATION,
        DateTime = 0x5011 => DATE_TIME,
        CaptureDelay = 0x5012 => CAPTURE_DELAY,
        StillCaptureMode = 0x5013 => STILL_CAPTURE_MODE,
        Contrast = 0x5014 => CONTRAST,
        Sharpness = 0x5015 => SHARPNESS,
        DigitalZoom = 0x5016 => DIGITAL_ZOOM,
        EffectMode = 0x5017 => EFFECT_MODE,
        BurstNumber = 0x5018 => BURST_NUMBER,
        BurstInterval = 0x5019 => BURST_INTERVAL,
        TimelapseNumber = 0x501A => TIMELAPSE_NUMBER,
        TimelapseInterval = 0x501B => TIMELAPSE_INTERVAL,
        FocusMeteringMode = 0x501C => FOCUS_METERING_MODE,
        UploadURL = 0x501D => UPLOAD_URL,
        Artist = 0x501E => ARTIST,
        CopyrightInfo = 0x501F => COPYRIGHT_INFO,
    }
}

code_tables! {
    /// Object format codes: ancillary 0x3000s, images 0x3800s.
    pub mod formats: ObjectFormatCode, FORMAT_NAMES {
        UndefinedAncillary = 0x3000 => UNDEFINED_ANCILLARY,
        Association = 0x3001 => ASSOCIATION,
        Script = 0x3002 => SCRIPT,
        Executable = 0x3003 => EXECUTABLE,
        Text = 0x3004 => TEXT,
        HTML = 0x3005 => HTML,
        DPOF = 0x3006 => DPOF,
        AIFF = 0x3007 => AIFF,
        WAV = 0x3008 => WAV,
        MP3 = 0x3009 => MP3,
        AVI = 0x300A => AVI,
        MPEG = 0x300B => MPEG,
        ASF = 0x300C => ASF,
        QT = 0x300D => QT,
        UndefinedImage = 0x3800 => UNDEFINED_IMAGE,
        EXIF_JPEG = 0x3801 => EXIF_JPEG,
        TIFF_EP = 0x3802 => TIFF_EP,
        FlashPix = 0x3803 => FLASH_PIX,
        BMP = 0x3804 => BMP,
        CIFF = 0x3805 => CIFF,
        GIF = 0x3807 => GIF,
        JFIF = 0x3808 => JFIF,
        PCD = 0x3809 => PCD,
        PICT = 0x380A => PICT,
        PNG = 0x380B => PNG,
        TIFF = 0x380D => TIFF,
        TIFF_IT = 0x380E => TIFF_IT,
        JP2 = 0x380F => JP2,
        JPX = 0x3810 => JPX,
        DNG = 0x3811 => DNG,
    }
}

code_tables! {
    /// Filesystem type codes.
    pub mod filesystems: FilesystemTypeCode, FILESYSTEM_NAMES {
        Undefined = 0x0000 => UNDEFINED,
        GenericFlat = 0x0001 => GENERIC_FLAT,
        GenericHierarchical = 0x0002 => GENERIC_HIERARCHICAL,
        DCF = 0x0003 => DCF,
    }
}

code_tables! {
    /// Data type codes: scalars 0x0001-0x000A, arrays add 0x4000,
    /// strings 0xFFFF.
    pub mod datatypes: DataTypeCode, DATATYPE_NAMES {
        Undefined = 0x0000 => UNDEFINED,
        Int8 = 0x0001 => INT8,
        UInt8 = 0x0002 => UINT8,
        Int16 = 0x0003 => INT16,
        UInt16 = 0x0004 => UINT16,
        Int32 = 0x0005 => INT32,
        UInt32 = 0x0006 => UINT32,
        Int64 = 0x0007 => INT64,
        UInt64 = 0x0008 => UINT64,
        Int128 = 0x0009 => INT128,
        UInt128 = 0x000A => UINT128,
        Int8Array = 0x4001 => INT8_ARRAY,
        UInt8Array = 0x4002 => UINT8_ARRAY,
        Int16Array = 0x4003 => INT16_ARRAY,
        UInt16Array = 0x4004 => UINT16_ARRAY,
        Int32Array = 0x4005 => INT32_ARRAY,
        UInt32Array = 0x4006 => UINT32_ARRAY,
        Int64Array = 0x4007 => INT64_ARRAY,
        UInt64Array = 0x4008 => UINT64_ARRAY,
        Int128Array = 0x4009 => INT128_ARRAY,
        UInt128Array = 0x400A => UINT128_ARRAY,
        String = 0xFFFF => STRING,
    }
}

/// Registered vendor extension IDs (32 bits on the wire).
pub mod extensions {
    use crate::types::VendorExtensionId;

    /// `EastmanKodak`
    pub const EASTMAN_KODAK: VendorExtensionId = VendorExtensionId(0x0000_0001);
    /// `SeikoEpson`
    pub const SEIKO_EPSON: VendorExtensionId = VendorExtensionId(0x0000_0002);
    /// `Agilent`
    pub const AGILENT: VendorExtensionId = VendorExtensionId(0x0000_0003);
    /// `Polaroid`
    pub const POLAROID: VendorExtensionId = VendorExtensionId(0x0000_0004);
    /// `AgfaGevaert`
    pub const AGFA_GEVAERT: VendorExtensionId = VendorExtensionId(0x0000_0005);
    /// `Microsoft`
    pub const MICROSOFT: VendorExtensionId = VendorExtensionId(0x0000_0006);
    /// `Equinox`
    pub const EQUINOX: VendorExtensionId = VendorExtensionId(0x0000_0007);
    /// `Viewquest`
    pub const VIEWQUEST: VendorExtensionId = VendorExtensionId(0x0000_0008);
    /// `STMicroelectronics`
    pub const ST_MICROELECTRONICS: VendorExtensionId = VendorExtensionId(0x0000_0009);
    /// `Nikon`
    pub const NIKON: VendorExtensionId = VendorExtensionId(0x0000_000A);
    /// `Canon`
    pub const CANON: VendorExtensionId = VendorExtensionId(0x0000_000B);
    /// `FotoNation`
    pub const FOTO_NATION: VendorExtensionId = VendorExtensionId(0x0000_000C);
    /// `PENTAX`
    pub const PENTAX: VendorExtensionId = VendorExtensionId(0x0000_000D);
    /// `Fuji`
    pub const FUJI: VendorExtensionId = VendorExtensionId(0x0000_000E);
    /// `Sony` (self-imposed; Sony never registered one)
    pub const SONY: VendorExtensionId = VendorExtensionId(0x0000_0011);
    /// `Samsung`
    pub const SAMSUNG: VendorExtensionId = VendorExtensionId(0x0000_001A);
    /// `Parrot`
    pub const PARROT: VendorExtensionId = VendorExtensionId(0x0000_001B);
}

/// Name table for vendor extension IDs.
pub static EXTENSION_NAMES: &[(&str, u32)] = &[
    ("EastmanKodak", 0x0000_0001),
    ("SeikoEpson", 0x0000_0002),
    ("Agilent", 0x0000_0003),
    ("Polaroid", 0x0000_0004),
    ("AgfaGevaert", 0x0000_0005),
    ("Microsoft", 0x0000_0006),
    ("Equinox", 0x0000_0007),
    ("Viewquest", 0x0000_0008),
    ("STMicroelectronics", 0x0000_0009),
    ("Nikon", 0x0000_000A),
    ("Canon", 0x0000_000B),
    ("FotoNation", 0x0000_000C),
    ("PENTAX", 0x0000_000D),
    ("Fuji", 0x0000_000E),
    ("Sony", 0x0000_0011),
    ("Samsung", 0x0000_001A),
    ("Parrot", 0x0000_001B),
];
