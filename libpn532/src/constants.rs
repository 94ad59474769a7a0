// libpn532/src/constants.rs
//! PN532 protocol constants: the one read-only catalog of wire bytes,
//! command opcodes and card-level codes used across the crate.

/// Frame preamble byte
pub const PN532_PREAMBLE: u8 = 0x00;
/// Start code: 0x00 0xFF
pub const PN532_START_CODE: [u8; 2] = [0x00, 0xFF];
/// Frame postamble byte
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Host->PN532 (D4) and PN532->host (D5) frame direction markers
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// SPI operation markers, sent as the first byte of every transaction
pub const PN532_SPI_DATAWRITE: u8 = 0x01;
pub const PN532_SPI_STATREAD: u8 = 0x02;
pub const PN532_SPI_DATAREAD: u8 = 0x03;
/// Status byte value signalling the PN532 has data ready
pub const PN532_SPI_READY: u8 = 0x01;

/// First byte clocked back during a data read
pub const PN532_SPI_READ_ECHO: u8 = 0x01;

/// Wake-up byte (HSU only, kept for completeness of the catalog)
pub const PN532_WAKEUP: u8 = 0x55;

/// ACK frame as seen on the SPI bus, echo byte included
pub const PN532_ACK: [u8; 7] = [0x01, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Outbound framing overhead: SPI marker, preamble, start code (2), LEN,
/// LCS, DCS and postamble
pub const PN532_FRAME_OVERHEAD: usize = 8;

/// Maximum frame payload length (TFI + data) for a normal information frame
pub const PN532_MAX_PAYLOAD_LEN: usize = 255;

/// Longest UID a single passive target may report
pub const PN532_MAX_UID_LEN: usize = 7;

/// PN532 GPIO validation bit and P3 pin numbers
pub const PN532_GPIO_VALIDATIONBIT: u8 = 0x80;
pub const PN532_GPIO_P30: u8 = 0;
pub const PN532_GPIO_P31: u8 = 1;
pub const PN532_GPIO_P32: u8 = 2;
pub const PN532_GPIO_P33: u8 = 3;
pub const PN532_GPIO_P34: u8 = 4;
pub const PN532_GPIO_P35: u8 = 5;

/// PN532 command opcodes. The response to a command carries `code + 1`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Diagnose = 0x00,
    GetFirmwareVersion = 0x02,
    GetGeneralStatus = 0x04,
    ReadRegister = 0x06,
    WriteRegister = 0x08,
    ReadGpio = 0x0C,
    WriteGpio = 0x0E,
    SetSerialBaudRate = 0x10,
    SetParameters = 0x12,
    SamConfiguration = 0x14,
    PowerDown = 0x16,
    RfConfiguration = 0x32,
    InDataExchange = 0x40,
    InCommunicateThru = 0x42,
    InDeselect = 0x44,
    InJumpForPsl = 0x46,
    InListPassiveTarget = 0x4A,
    InPsl = 0x4E,
    InAtr = 0x50,
    InRelease = 0x52,
    InSelect = 0x54,
    InJumpForDep = 0x56,
    RfRegulationTest = 0x58,
    InAutoPoll = 0x60,
    TgGetData = 0x86,
    TgGetInitiatorCommand = 0x88,
    TgGetTargetStatus = 0x8A,
    TgInitAsTarget = 0x8C,
    TgSetData = 0x8E,
    TgResponseToInitiator = 0x90,
    TgSetGeneralBytes = 0x92,
    TgSetMetaData = 0x94,
}

impl Command {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Response code the PN532 answers this command with.
    pub fn response_code(self) -> u8 {
        (self as u8).wrapping_add(1)
    }
}

/// MIFARE Classic / Ultralight command bytes (sent through InDataExchange)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MifareCommand {
    Read = 0x30,
    AuthA = 0x60,
    AuthB = 0x61,
    Write = 0xA0,
    UltralightWrite = 0xA2,
    Transfer = 0xB0,
    Decrement = 0xC0,
    Increment = 0xC1,
    Store = 0xC2,
}

impl MifareCommand {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// NDEF URI record identifier codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriPrefix {
    None = 0x00,
    HttpWww = 0x01,
    HttpsWww = 0x02,
    Http = 0x03,
    Https = 0x04,
    Tel = 0x05,
    Mailto = 0x06,
    FtpAnonymous = 0x07,
    FtpFtp = 0x08,
    Ftps = 0x09,
    Sftp = 0x0A,
    Smb = 0x0B,
    Nfs = 0x0C,
    Ftp = 0x0D,
    Dav = 0x0E,
    News = 0x0F,
    Telnet = 0x10,
    Imap = 0x11,
    Rtsp = 0x12,
    Urn = 0x13,
    Pop = 0x14,
    Sip = 0x15,
    Sips = 0x16,
    Tftp = 0x17,
    BtSpp = 0x18,
    BtL2cap = 0x19,
    BtGoep = 0x1A,
    TcpObex = 0x1B,
    IrdaObex = 0x1C,
    File = 0x1D,
    UrnEpcId = 0x1E,
    UrnEpcTag = 0x1F,
    UrnEpcPat = 0x20,
    UrnEpcRaw = 0x21,
    UrnEpc = 0x22,
    UrnNfc = 0x23,
}

const URI_PREFIXES: [(UriPrefix, &str); 36] = [
    (UriPrefix::None, ""),
    (UriPrefix::HttpWww, "http://www."),
    (UriPrefix::HttpsWww, "https://www."),
    (UriPrefix::Http, "http://"),
    (UriPrefix::Https, "https://"),
    (UriPrefix::Tel, "tel:"),
    (UriPrefix::Mailto, "mailto:"),
    (UriPrefix::FtpAnonymous, "ftp://anonymous:anonymous@"),
    (UriPrefix::FtpFtp, "ftp://ftp."),
    (UriPrefix::Ftps, "ftps://"),
    (UriPrefix::Sftp, "sftp://"),
    (UriPrefix::Smb, "smb://"),
    (UriPrefix::Nfs, "nfs://"),
    (UriPrefix::Ftp, "ftp://"),
    (UriPrefix::Dav, "dav://"),
    (UriPrefix::News, "news:"),
    (UriPrefix::Telnet, "telnet://"),
    (UriPrefix::Imap, "imap:"),
    (UriPrefix::Rtsp, "rtsp://"),
    (UriPrefix::Urn, "urn:"),
    (UriPrefix::Pop, "pop:"),
    (UriPrefix::Sip, "sip:"),
    (UriPrefix::Sips, "sips:"),
    (UriPrefix::Tftp, "tftp:"),
    (UriPrefix::BtSpp, "btspp://"),
    (UriPrefix::BtL2cap, "btl2cap://"),
    (UriPrefix::BtGoep, "btgoep://"),
    (UriPrefix::TcpObex, "tcpobex://"),
    (UriPrefix::IrdaObex, "irdaobex://"),
    (UriPrefix::File, "file://"),
    (UriPrefix::UrnEpcId, "urn:epc:id:"),
    (UriPrefix::UrnEpcTag, "urn:epc:tag:"),
    (UriPrefix::UrnEpcPat, "urn:epc:pat:"),
    (UriPrefix::UrnEpcRaw, "urn:epc:raw:"),
    (UriPrefix::UrnEpc, "urn:epc:"),
    (UriPrefix::UrnNfc, "urn:nfc:"),
];

impl UriPrefix {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a prefix by its identifier code.
    pub fn from_code(code: u8) -> Option<Self> {
        URI_PREFIXES.get(code as usize).map(|(p, _)| *p)
    }

    /// The URI text abbreviated by this identifier code.
    pub fn prefix_str(self) -> &'static str {
        URI_PREFIXES[self as usize].1
    }
}
