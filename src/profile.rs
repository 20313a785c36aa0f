//! Profile Binding
//!
//! A summarized service record still has to be checked against the profile
//! the caller is actually looking for. The acceptance rule is structural:
//! the right service class must be advertised, the protocol stack must end
//! in RFCOMM with a usable server channel, and the profile descriptor list
//! must name a recognized profile. Any failing condition rejects the whole
//! record; on acceptance the summary is projected into a compact
//! [`ProfileInfo`] for the connection manager.

use crate::attribute::ServiceAttribute;
use crate::element::BLUETOOTH_BASE_UUID;
use crate::summary::ServiceRecordSummary;

/// Short-form UUID of the RFCOMM protocol
pub const RFCOMM_UUID: u16 = 0x0003;

/// Short-form UUID of the L2CAP protocol
pub const L2CAP_UUID: u16 = 0x0100;

/// Standard Bluetooth Service Classes
///
/// The audio/telephony subset this crate's profile targets draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ServiceClassId {
    /// Serial Port Profile
    SerialPort = 0x1101,
    /// Headset Profile
    Headset = 0x1108,
    /// Audio Source
    AudioSource = 0x110A,
    /// Audio Sink
    AudioSink = 0x110B,
    /// Headset Audio Gateway
    HeadsetAudioGateway = 0x1112,
    /// Hands-Free Profile
    HandsFree = 0x111E,
    /// Hands-Free Audio Gateway
    HandsFreeAudioGateway = 0x111F,
    /// Generic Audio
    GenericAudio = 0x1203,
}

impl ServiceClassId {
    /// Convert to 128-bit UUID
    #[must_use]
    pub const fn to_uuid(self) -> u128 {
        BLUETOOTH_BASE_UUID | ((self as u128) << 96)
    }

    /// Get service class name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SerialPort => "Serial Port",
            Self::Headset => "Headset",
            Self::AudioSource => "Audio Source",
            Self::AudioSink => "Audio Sink",
            Self::HeadsetAudioGateway => "Headset Audio Gateway",
            Self::HandsFree => "Hands-Free",
            Self::HandsFreeAudioGateway => "Hands-Free Audio Gateway",
            Self::GenericAudio => "Generic Audio",
        }
    }
}

/// A profile's acceptance pattern
///
/// `service_class` is the class the record must advertise for this role;
/// `descriptor_uuids` are the profile UUIDs recognized in the Bluetooth
/// Profile Descriptor List (both sides of a profile usually register the
/// same descriptor UUID regardless of role).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileTarget {
    /// Required service class UUID
    pub service_class: u16,
    /// Recognized profile descriptor UUIDs
    pub descriptor_uuids: &'static [u16],
}

/// Hands-Free unit role
pub const HANDS_FREE: ProfileTarget = ProfileTarget {
    service_class: ServiceClassId::HandsFree as u16,
    descriptor_uuids: &[
        ServiceClassId::HandsFree as u16,
        ServiceClassId::HandsFreeAudioGateway as u16,
    ],
};

/// Hands-Free Audio Gateway role
pub const HANDS_FREE_AUDIO_GATEWAY: ProfileTarget = ProfileTarget {
    service_class: ServiceClassId::HandsFreeAudioGateway as u16,
    descriptor_uuids: &[
        ServiceClassId::HandsFree as u16,
        ServiceClassId::HandsFreeAudioGateway as u16,
    ],
};

/// Headset role
pub const HEADSET: ProfileTarget = ProfileTarget {
    service_class: ServiceClassId::Headset as u16,
    descriptor_uuids: &[ServiceClassId::Headset as u16],
};

/// Headset Audio Gateway role
pub const HEADSET_AUDIO_GATEWAY: ProfileTarget = ProfileTarget {
    service_class: ServiceClassId::HeadsetAudioGateway as u16,
    descriptor_uuids: &[ServiceClassId::Headset as u16],
};

/// Connection parameters recovered from an accepted service record
///
/// String fields re-expose the summary's borrowed views; the record tree
/// must stay alive for as long as they are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileInfo<'a> {
    /// RFCOMM server channel for the connection request
    pub server_channel: u8,
    /// Advertised profile version
    pub profile_version: u16,
    /// Supported Features mask
    pub supported_features: u16,
    /// Service Name, when advertised
    pub service_name: Option<&'a [u8]>,
    /// Service Description, when advertised
    pub service_description: Option<&'a [u8]>,
    /// Provider Name, when advertised
    pub provider_name: Option<&'a [u8]>,
}

impl ProfileTarget {
    /// Check a summary against this profile and project it on acceptance
    ///
    /// Accepts when the target service class is advertised, the second
    /// protocol descriptor is RFCOMM with a channel number that fits `u8`,
    /// and a recognized profile descriptor supplies the version. Returns
    /// `None` otherwise; there is no partial acceptance.
    #[must_use]
    pub fn bind<'a>(&self, summary: &ServiceRecordSummary<'a>) -> Option<ProfileInfo<'a>> {
        if !summary.has_service_class(self.service_class) {
            return None;
        }

        let rfcomm = summary.protocols.get(1)?;
        if rfcomm.uuid != RFCOMM_UUID {
            return None;
        }
        let server_channel = u8::try_from(rfcomm.parameter?).ok()?;

        let descriptor = summary
            .profile_descriptors
            .iter()
            .find(|descriptor| self.descriptor_uuids.contains(&descriptor.uuid))?;

        Some(ProfileInfo {
            server_channel,
            profile_version: descriptor.version,
            supported_features: summary.supported_features,
            service_name: summary.service_name,
            service_description: summary.service_description,
            provider_name: summary.provider_name,
        })
    }

    /// Summarize an attribute list and bind it in one step
    #[must_use]
    pub fn locate<'a>(&self, attributes: &[ServiceAttribute<'a>]) -> Option<ProfileInfo<'a>> {
        self.bind(&ServiceRecordSummary::from_attributes(attributes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{ids, service_name_id};
    use crate::element::DataElement;

    // A well-formed Hands-Free Audio Gateway record, shared by the
    // scenario tests below.
    const CLASSES: [DataElement<'static>; 2] = [
        DataElement::Uuid16(0x111F),
        DataElement::Uuid16(0x1203),
    ];
    const L2CAP: [DataElement<'static>; 1] = [DataElement::Uuid16(0x0100)];
    const RFCOMM: [DataElement<'static>; 2] =
        [DataElement::Uuid16(0x0003), DataElement::UnsignedInt8(17)];
    const PROTOCOLS: [DataElement<'static>; 2] =
        [DataElement::Sequence(&L2CAP), DataElement::Sequence(&RFCOMM)];
    const HF_DESCRIPTOR: [DataElement<'static>; 2] = [
        DataElement::Uuid16(0x111E),
        DataElement::UnsignedInt16(0x0107),
    ];
    const DESCRIPTORS: [DataElement<'static>; 1] = [DataElement::Sequence(&HF_DESCRIPTOR)];

    fn gateway_record() -> [ServiceAttribute<'static>; 5] {
        [
            ServiceAttribute::new(ids::SERVICE_CLASS_ID_LIST, DataElement::Sequence(&CLASSES)),
            ServiceAttribute::new(
                ids::PROTOCOL_DESCRIPTOR_LIST,
                DataElement::Sequence(&PROTOCOLS),
            ),
            ServiceAttribute::new(
                ids::BLUETOOTH_PROFILE_DESCRIPTOR_LIST,
                DataElement::Sequence(&DESCRIPTORS),
            ),
            ServiceAttribute::new(ids::SUPPORTED_FEATURES, DataElement::UnsignedInt16(0x003F)),
            ServiceAttribute::new(service_name_id(), DataElement::TextString(b"Voice Gateway")),
        ]
    }

    #[test]
    fn test_gateway_record_accepted() {
        let info = HANDS_FREE_AUDIO_GATEWAY.locate(&gateway_record()).unwrap();

        assert_eq!(info.server_channel, 17);
        assert_eq!(info.profile_version, 0x0107);
        assert_eq!(info.supported_features, 0x003F);
        assert_eq!(info.service_name, Some(&b"Voice Gateway"[..]));
        assert_eq!(info.service_description, None);
        assert_eq!(info.provider_name, None);
    }

    #[test]
    fn test_single_protocol_entry_rejected() {
        const PROTOCOLS: [DataElement<'static>; 1] = [DataElement::Sequence(&RFCOMM)];
        let mut record = gateway_record();
        record[1] = ServiceAttribute::new(
            ids::PROTOCOL_DESCRIPTOR_LIST,
            DataElement::Sequence(&PROTOCOLS),
        );

        assert!(HANDS_FREE_AUDIO_GATEWAY.locate(&record).is_none());
    }

    #[test]
    fn test_missing_target_class_rejected() {
        const CLASSES: [DataElement<'static>; 2] =
            [DataElement::Uuid16(0x110A), DataElement::Uuid16(0x1203)];
        let mut record = gateway_record();
        record[0] =
            ServiceAttribute::new(ids::SERVICE_CLASS_ID_LIST, DataElement::Sequence(&CLASSES));

        assert!(HANDS_FREE_AUDIO_GATEWAY.locate(&record).is_none());
    }

    #[test]
    fn test_unrecognized_profile_descriptor_rejected() {
        const HEADSET_DESCRIPTOR: [DataElement<'static>; 2] = [
            DataElement::Uuid16(0x1108),
            DataElement::UnsignedInt16(0x0102),
        ];
        const DESCRIPTORS: [DataElement<'static>; 1] =
            [DataElement::Sequence(&HEADSET_DESCRIPTOR)];
        let mut record = gateway_record();
        record[2] = ServiceAttribute::new(
            ids::BLUETOOTH_PROFILE_DESCRIPTOR_LIST,
            DataElement::Sequence(&DESCRIPTORS),
        );

        assert!(HANDS_FREE_AUDIO_GATEWAY.locate(&record).is_none());
    }

    #[test]
    fn test_second_protocol_must_be_rfcomm() {
        const BNEP: [DataElement<'static>; 2] =
            [DataElement::Uuid16(0x000F), DataElement::UnsignedInt8(17)];
        const PROTOCOLS: [DataElement<'static>; 2] =
            [DataElement::Sequence(&L2CAP), DataElement::Sequence(&BNEP)];
        let mut record = gateway_record();
        record[1] = ServiceAttribute::new(
            ids::PROTOCOL_DESCRIPTOR_LIST,
            DataElement::Sequence(&PROTOCOLS),
        );

        assert!(HANDS_FREE_AUDIO_GATEWAY.locate(&record).is_none());
    }

    #[test]
    fn test_rfcomm_without_channel_rejected() {
        const RFCOMM_BARE: [DataElement<'static>; 1] = [DataElement::Uuid16(0x0003)];
        const PROTOCOLS: [DataElement<'static>; 2] = [
            DataElement::Sequence(&L2CAP),
            DataElement::Sequence(&RFCOMM_BARE),
        ];
        let mut record = gateway_record();
        record[1] = ServiceAttribute::new(
            ids::PROTOCOL_DESCRIPTOR_LIST,
            DataElement::Sequence(&PROTOCOLS),
        );

        assert!(HANDS_FREE_AUDIO_GATEWAY.locate(&record).is_none());
    }

    #[test]
    fn test_other_targets_reject_gateway_record() {
        let record = gateway_record();

        assert!(HANDS_FREE.locate(&record).is_none());
        assert!(HEADSET.locate(&record).is_none());
        assert!(HEADSET_AUDIO_GATEWAY.locate(&record).is_none());
    }

    #[test]
    fn test_missing_optional_attributes_still_accepted() {
        // Features and name are optional; the structural checks are not.
        let record = gateway_record();
        let info = HANDS_FREE_AUDIO_GATEWAY.locate(&record[..3]).unwrap();

        assert_eq!(info.server_channel, 17);
        assert_eq!(info.supported_features, 0);
        assert_eq!(info.service_name, None);
    }

    #[test]
    fn test_service_class_uuid_promotion() {
        // 0000111F-0000-1000-8000-00805F9B34FB
        assert_eq!(
            ServiceClassId::HandsFreeAudioGateway.to_uuid(),
            0x0000_111F_0000_1000_8000_0080_5F9B_34FB
        );
        assert_eq!(ServiceClassId::HandsFree.name(), "Hands-Free");
    }
}
