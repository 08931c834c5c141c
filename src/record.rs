//! Publishable summary of a reading.

use core::fmt::{self, Write};

use crate::reading::Reading;

/// A reading tagged with its source and time, ready to hand to a transport.
///
/// The `Display` implementation renders the single-line JSON object the
/// monitoring dashboard subscribes to, so a record can be written into any
/// `core::fmt::Write` buffer without allocating. Keys and comfort labels are
/// part of that wire format and must not be renamed:
///
/// ```
/// use dht11_sensor::{Reading, Record};
///
/// let reading = Reading { temperature: 24.5, humidity: 50.0 };
/// let record = Record::new("greenhouse-1", reading, 1_700_000_000);
/// assert_eq!(
///     format!("{record}"),
///     r#"{"device_id":"greenhouse-1","temperatura":24.5,"umidade":50.0,"indice_calor":24.5,"status_conforto":"Confortavel","timestamp":1700000000}"#,
/// );
/// ```
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record<'a> {
    /// Identifier of the publishing device, JSON-escaped on output.
    pub device_id: &'a str,
    /// The validated measurement.
    pub reading: Reading,
    /// Seconds since an epoch chosen by the caller.
    pub timestamp: i64,
}

impl<'a> Record<'a> {
    /// Creates a record for `reading` taken by `device_id` at `timestamp`.
    pub fn new(device_id: &'a str, reading: Reading, timestamp: i64) -> Self {
        Record {
            device_id,
            reading,
            timestamp,
        }
    }
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"{"device_id":""#)?;
        write_escaped(f, self.device_id)?;
        write!(
            f,
            r#"","temperatura":{:.1},"umidade":{:.1},"indice_calor":{:.1},"status_conforto":"{}","timestamp":{}}}"#,
            self.reading.temperature,
            self.reading.humidity,
            self.reading.heat_index(),
            self.reading.comfort().as_str(),
            self.timestamp,
        )
    }
}

fn write_escaped<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c.is_control() => write!(out, "\\u{:04x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_record() {
        let reading = Reading {
            temperature: 30.0,
            humidity: 70.0,
        };
        let record = Record::new("shed", reading, 42);

        assert_eq!(
            record.to_string(),
            r#"{"device_id":"shed","temperatura":30.0,"umidade":70.0,"indice_calor":35.0,"status_conforto":"Quente","timestamp":42}"#
        );
    }

    #[test]
    fn test_device_id_is_escaped() {
        let reading = Reading {
            temperature: 10.0,
            humidity: 5.5,
        };
        let record = Record::new("a\"b\\c\u{1}", reading, 0);

        assert_eq!(
            record.to_string(),
            r#"{"device_id":"a\"b\\c\u0001","temperatura":10.0,"umidade":5.5,"indice_calor":10.0,"status_conforto":"Frio","timestamp":0}"#
        );
    }

    #[test]
    fn test_matches_dashboard_payload() {
        // Same field order and precision as the firmware's
        // {"device_id":"%s","temperatura":%.1f,"umidade":%.1f,
        //  "indice_calor":%.1f,"status_conforto":"%s","timestamp":%lld}
        let reading = Reading {
            temperature: 24.5,
            humidity: 50.0,
        };
        let record = Record::new("sensor_animais_01", reading, 1);

        assert_eq!(
            record.to_string(),
            r#"{"device_id":"sensor_animais_01","temperatura":24.5,"umidade":50.0,"indice_calor":24.5,"status_conforto":"Confortavel","timestamp":1}"#
        );
    }

    #[test]
    fn test_dangerous_label() {
        let reading = Reading {
            temperature: 35.0,
            humidity: 20.0,
        };
        let payload = Record::new("shed", reading, 7).to_string();

        assert!(payload.contains(r#""status_conforto":"Perigoso""#));
    }
}
