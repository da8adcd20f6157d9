/// Body Mass Index classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `weight / height_m²`, rounded to one decimal place.
///
/// No input checking happens here; zero height yields infinity and NaN
/// propagates.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_one_decimal(weight_kg / (height_m * height_m))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Boundary values belong to the higher category.
pub fn categorize(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Parse a decimal form field like a browser `parseFloat`: the longest numeric
/// prefix after leading whitespace, or NaN.
///
/// An exponent is taken only when at least one digit follows the `e`, and a
/// signed or bare `Infinity` prefix parses as infinity.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let int_len = digits(end);
    end += int_len;
    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = digits(end + 1);
        end += 1 + frac_len;
    }
    if int_len + frac_len == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_len = digits(exp);
        if exp_len > 0 {
            end = exp + exp_len;
        }
    }
    s[..end]
        .trim_end_matches('.')
        .parse()
        .unwrap_or(f64::NAN)
}

/// Text shown for the BMI value and its category.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BmiReading {
    pub value: String,
    pub category: String,
}

/// Editable state of the BMI form.
#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    pub height_cm: String,
    pub weight_kg: String,
    pub reading: Option<BmiReading>,
}

impl BmiForm {
    /// Compute and store the reading for the current fields.
    ///
    /// Fields that do not parse show `NaN`. Parsed but non-positive values are
    /// reported as invalid instead of producing an infinite or negative BMI.
    pub fn submit(&mut self) -> &BmiReading {
        let height = parse_float(&self.height_cm);
        let weight = parse_float(&self.weight_kg);
        // NaN fails every comparison, so unparsed input falls through to the
        // calculation and displays as NaN.
        let reading = if height <= 0.0 || weight <= 0.0 {
            log::warn!("Rejecting BMI input: height {height}, weight {weight}");
            BmiReading {
                value: "-".into(),
                category: "Invalid input".into(),
            }
        } else {
            let bmi = calculate_bmi(weight, height);
            BmiReading {
                value: format!("{bmi:.1}"),
                category: categorize(bmi).label().into(),
            }
        };
        self.reading.insert(reading)
    }
}
