//! Meeting settings record and its JSON codec

use serde::{Deserialize, Serialize};

use crate::prelude::*;

// Weekday //
//*********//
/// Day of the week a meeting recurs on.
///
/// Serialized by full English name ("Sunday" .. "Saturday"), matching the
/// wire format of the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
	Sunday,
	Monday,
	Tuesday,
	Wednesday,
	Thursday,
	Friday,
	Saturday,
}

// MeetingSettings //
//*****************//
/// Per-channel meeting settings.
///
/// The record embeds its own channel id, so a stored value is self-describing
/// independent of the key it was saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSettings {
	pub channel_id: Box<str>,
	pub schedule: Weekday,
	pub hashtag_format: Box<str>,
}

impl MeetingSettings {
	/// Encodes the record as JSON bytes for storage.
	pub fn encode(&self) -> HdResult<Vec<u8>> {
		serde_json::to_vec(self).map_err(|err| Error::Internal(err.to_string()))
	}

	/// Decodes a record from JSON bytes.
	///
	/// Unknown fields are ignored. Missing or mistyped fields fail the decode.
	pub fn decode(bytes: &[u8]) -> HdResult<MeetingSettings> {
		serde_json::from_slice(bytes).map_err(|err| Error::DecodeError(err.to_string()))
	}
}

// Tests //
//*******//
#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> MeetingSettings {
		MeetingSettings {
			channel_id: "myChannelId".into(),
			schedule: Weekday::Tuesday,
			hashtag_format: "MyMeeting-Jan-02".into(),
		}
	}

	#[test]
	fn test_encode_wire_format() {
		let bytes = sample().encode().expect("Failed to encode settings");
		assert_eq!(
			String::from_utf8(bytes).expect("Encoded settings are not UTF-8"),
			r#"{"channelId":"myChannelId","schedule":"Tuesday","hashtagFormat":"MyMeeting-Jan-02"}"#
		);
	}

	#[test]
	fn test_decode_round_trip() {
		let settings = sample();
		let bytes = settings.encode().expect("Failed to encode settings");
		let decoded = MeetingSettings::decode(&bytes).expect("Failed to decode settings");
		assert_eq!(decoded, settings);
	}

	#[test]
	fn test_decode_ignores_unknown_fields() {
		let decoded = MeetingSettings::decode(
			br#"{"channelId":"c1","schedule":"Friday","hashtagFormat":"F","extra":42}"#,
		)
		.expect("Failed to decode settings with unknown field");
		assert_eq!(decoded.schedule, Weekday::Friday);
	}

	#[test]
	fn test_decode_rejects_invalid_weekday() {
		let res =
			MeetingSettings::decode(br#"{"channelId":"c1","schedule":"Funday","hashtagFormat":"F"}"#);
		assert!(matches!(res, Err(Error::DecodeError(_))));
	}

	#[test]
	fn test_decode_rejects_missing_field() {
		let res = MeetingSettings::decode(br#"{"channelId":"c1","schedule":"Monday"}"#);
		assert!(matches!(res, Err(Error::DecodeError(_))));
	}

	#[test]
	fn test_decode_rejects_invalid_json() {
		let res = MeetingSettings::decode(b"{not json");
		assert!(matches!(res, Err(Error::DecodeError(_))));
	}

	#[test]
	fn test_decode_rejects_non_utf8() {
		let res = MeetingSettings::decode(&[0xff, 0xfe, 0x00]);
		assert!(matches!(res, Err(Error::DecodeError(_))));
	}
}

// vim: ts=4
