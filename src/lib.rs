#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod attribute;
pub mod display;
pub mod element;
pub mod profile;
pub mod summary;

pub use attribute::{LanguageAttributeOffset, PRIMARY_LANGUAGE_BASE_ID, ServiceAttribute};
pub use element::{BLUETOOTH_BASE_UUID, DataElement, DataElementType};
pub use profile::{ProfileInfo, ProfileTarget, ServiceClassId};
pub use summary::{
    MAX_SUMMARY_ENTRIES, ProfileDescriptor, ProtocolDescriptor, ServiceRecordSummary,
};
