//! Sensirion SHTC3 humidity/temperature sensor
//!
//! Blocking I2C driver. Each measurement wakes the sensor, runs one
//! normal-mode conversion with temperature first and clock stretching
//! disabled, reads both words with their CRCs and puts the sensor back to
//! sleep.

use dryer_core::traits::{HumidityMeasurement, HumiditySensor, SensorError};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// Fixed 7-bit address
pub const ADDRESS: u8 = 0x70;

const CMD_WAKEUP: [u8; 2] = [0x35, 0x17];
const CMD_SLEEP: [u8; 2] = [0xB0, 0x98];
/// Normal mode, T first, no clock stretching
const CMD_MEASURE: [u8; 2] = [0x78, 0x66];

/// Wake-up time (max)
const WAKEUP_US: u32 = 240;
/// Normal-mode conversion time (max)
const MEASURE_US: u32 = 12_100;

/// CRC-8, polynomial 0x31, init 0xFF
pub fn crc8(data: &[u8]) -> u8 {
    let mut crc: u8 = 0xFF;
    for &byte in data {
        crc ^= byte;
        for _ in 0..8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ 0x31
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Raw temperature word to °C
pub fn raw_to_celsius(raw: u16) -> f32 {
    -45.0 + 175.0 * raw as f32 / 65536.0
}

/// Raw humidity word to %RH
pub fn raw_to_humidity(raw: u16) -> f32 {
    100.0 * raw as f32 / 65536.0
}

/// Check a word and its CRC byte
fn checked_word(bytes: &[u8]) -> Result<u16, SensorError> {
    if crc8(&bytes[..2]) != bytes[2] {
        return Err(SensorError::CrcMismatch);
    }
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub struct Shtc3<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C: I2c, D: DelayNs> Shtc3<I2C, D> {
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Read the 16-bit ID register
    pub fn read_id(&mut self) -> Result<u16, SensorError> {
        self.wake()?;
        let mut buf = [0u8; 3];
        self.i2c
            .write_read(ADDRESS, &[0xEF, 0xC8], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        let id = checked_word(&buf);
        self.sleep()?;
        id
    }

    fn wake(&mut self) -> Result<(), SensorError> {
        self.i2c
            .write(ADDRESS, &CMD_WAKEUP)
            .map_err(|_| SensorError::Bus)?;
        self.delay.delay_us(WAKEUP_US);
        Ok(())
    }

    fn sleep(&mut self) -> Result<(), SensorError> {
        self.i2c
            .write(ADDRESS, &CMD_SLEEP)
            .map_err(|_| SensorError::Bus)
    }

    fn convert(&mut self) -> Result<HumidityMeasurement, SensorError> {
        self.i2c
            .write(ADDRESS, &CMD_MEASURE)
            .map_err(|_| SensorError::Bus)?;
        self.delay.delay_us(MEASURE_US);

        let mut buf = [0u8; 6];
        self.i2c
            .read(ADDRESS, &mut buf)
            .map_err(|_| SensorError::Bus)?;

        let t_raw = checked_word(&buf[0..3])?;
        let rh_raw = checked_word(&buf[3..6])?;
        Ok(HumidityMeasurement {
            relative_humidity: raw_to_humidity(rh_raw),
            temperature_c: raw_to_celsius(t_raw),
        })
    }
}

impl<I2C: I2c, D: DelayNs> HumiditySensor for Shtc3<I2C, D> {
    fn measure(&mut self) -> Result<HumidityMeasurement, SensorError> {
        self.wake()?;
        let result = self.convert();
        // Sleep even after a failed conversion; the conversion error wins
        let slept = self.sleep();
        let measurement = result?;
        slept?;
        Ok(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    struct MockI2c {
        response: [u8; 6],
        writes: [[u8; 2]; 4],
        write_count: usize,
        fail: bool,
    }

    impl MockI2c {
        fn new(response: [u8; 6]) -> Self {
            Self {
                response,
                writes: [[0; 2]; 4],
                write_count: 0,
                fail: false,
            }
        }
    }

    impl ErrorType for MockI2c {
        type Error = ErrorKind;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            assert_eq!(address, ADDRESS);
            if self.fail {
                return Err(ErrorKind::Other);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if self.write_count < self.writes.len() {
                            self.writes[self.write_count].copy_from_slice(&bytes[..2]);
                        }
                        self.write_count += 1;
                    }
                    Operation::Read(buf) => {
                        let n = buf.len();
                        buf.copy_from_slice(&self.response[..n]);
                    }
                }
            }
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn frame(t_raw: u16, rh_raw: u16) -> [u8; 6] {
        let t = t_raw.to_be_bytes();
        let rh = rh_raw.to_be_bytes();
        [t[0], t[1], crc8(&t), rh[0], rh[1], crc8(&rh)]
    }

    #[test]
    fn test_crc_reference() {
        // Datasheet example
        assert_eq!(crc8(&[0xBE, 0xEF]), 0x92);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(raw_to_celsius(0), -45.0);
        assert!((raw_to_celsius(0x6666) - 25.0).abs() < 0.01);
        assert_eq!(raw_to_humidity(0x8000), 50.0);
    }

    #[test]
    fn test_measure_sequence() {
        let mut sensor = Shtc3::new(MockI2c::new(frame(0x6666, 0x8000)), NoDelay);
        let m = sensor.measure().unwrap();

        assert!((m.temperature_c - 25.0).abs() < 0.01);
        assert_eq!(m.relative_humidity, 50.0);
        assert_eq!(sensor.i2c.write_count, 3);
        assert_eq!(sensor.i2c.writes[0], CMD_WAKEUP);
        assert_eq!(sensor.i2c.writes[1], CMD_MEASURE);
        assert_eq!(sensor.i2c.writes[2], CMD_SLEEP);
    }

    #[test]
    fn test_crc_failure() {
        let mut response = frame(0x6666, 0x8000);
        response[5] ^= 0xFF;
        let mut sensor = Shtc3::new(MockI2c::new(response), NoDelay);
        assert_eq!(sensor.measure(), Err(SensorError::CrcMismatch));
        // Still put back to sleep
        assert_eq!(sensor.i2c.writes[2], CMD_SLEEP);
    }

    #[test]
    fn test_bus_failure() {
        let mut i2c = MockI2c::new([0; 6]);
        i2c.fail = true;
        let mut sensor = Shtc3::new(i2c, NoDelay);
        assert_eq!(sensor.measure(), Err(SensorError::Bus));
    }
}
