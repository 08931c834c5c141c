/// Reading returned by the DHT11 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub humidity: f32,
}

/// Below this temperature the heat index equals the air temperature.
const HEAT_INDEX_THRESHOLD_C: f32 = 26.7;

impl Reading {
    /// Apparent temperature in degrees Celsius.
    ///
    /// Uses the Rothfusz regression with Celsius coefficients. The regression
    /// is only meaningful in warm conditions, so cooler readings return the
    /// measured temperature unchanged.
    pub fn heat_index(&self) -> f32 {
        let t = self.temperature;
        let h = self.humidity;
        if t < HEAT_INDEX_THRESHOLD_C {
            return t;
        }

        -8.784695 + 1.61139411 * t + 2.338549 * h
            - 0.14611605 * t * h
            - 0.01230809 * t * t
            - 0.016424828 * h * h
            + 0.002211732 * t * t * h
            + 0.00072546 * t * h * h
            - 0.000003582 * t * t * h * h
    }

    /// Coarse comfort classification of the measured temperature.
    pub fn comfort(&self) -> Comfort {
        Comfort::from_celsius(self.temperature)
    }
}

/// Thermal comfort band.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comfort {
    /// Below 15 °C.
    Cold,
    /// 15 °C up to and including 26 °C.
    Comfortable,
    /// Above 26 °C up to and including 32 °C.
    Hot,
    /// Above 32 °C.
    Dangerous,
}

impl Comfort {
    /// Classifies a temperature in degrees Celsius. `NaN` is `Dangerous`.
    pub fn from_celsius(temperature: f32) -> Self {
        if temperature < 15.0 {
            Comfort::Cold
        } else if temperature <= 26.0 {
            Comfort::Comfortable
        } else if temperature <= 32.0 {
            Comfort::Hot
        } else {
            Comfort::Dangerous
        }
    }

    /// Label published in the `status_conforto` field of a
    /// [`Record`](crate::Record). The dashboard derives CSS classes from it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Comfort::Cold => "Frio",
            Comfort::Comfortable => "Confortavel",
            Comfort::Hot => "Quente",
            Comfort::Dangerous => "Perigoso",
        }
    }
}
