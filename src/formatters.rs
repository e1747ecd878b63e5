use crate::models::WeatherReport;

/// One line of a rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub text: String,
    /// Presentation hint: the line carries one of the headline readings
    pub emphasized: bool,
}

impl ReportLine {
    fn plain(text: String) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    fn emphasized(text: String) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest
pub fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for c in text.chars() {
        if prev_is_alpha {
            output.extend(c.to_lowercase());
        } else {
            output.extend(c.to_uppercase());
        }
        prev_is_alpha = c.is_alphabetic();
    }
    output
}

/// Projects a report into display lines
pub fn render_lines(report: &WeatherReport) -> Vec<ReportLine> {
    let mut lines = Vec::with_capacity(10);

    if report.is_postal_lookup {
        lines.push(ReportLine::plain(format!(
            "Address: {}",
            report.location_label
        )));
    } else {
        lines.push(ReportLine::plain(format!(
            "Location: {}",
            report.location_label
        )));
        lines.push(ReportLine::plain(format!(
            "State: {}",
            report.state.as_deref().unwrap_or_default()
        )));
        lines.push(ReportLine::plain(format!(
            "City: {}",
            report.city.as_deref().unwrap_or_default()
        )));
        lines.push(ReportLine::plain(format!(
            "Locality: {}",
            report.locality.as_deref().unwrap_or("N/A")
        )));
    }
    lines.push(ReportLine::plain(format!("Date & Time: {}", report.timestamp)));
    lines.push(ReportLine::plain(String::new()));

    lines.push(ReportLine::emphasized(format!(
        "Temperature: {}{}",
        report.temperature, report.unit_symbol
    )));
    lines.push(ReportLine::emphasized(format!(
        "Weather: {}",
        report.condition_description
    )));
    lines.push(ReportLine::emphasized(format!(
        "Humidity: {}%",
        report.humidity_percent
    )));
    lines.push(ReportLine::emphasized(format!(
        "Wind Speed: {} {}",
        report.wind_speed,
        report.units.wind_speed_label()
    )));

    lines
}

/// Formats a report as plain multi-line text
pub fn render_plain(report: &WeatherReport) -> String {
    render_lines(report)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a report as markdown with the headline readings in bold
pub fn render_markdown(report: &WeatherReport) -> String {
    let mut output = String::new();
    for line in render_lines(report) {
        if line.emphasized {
            output.push_str(&format!("**{}**", line.text));
        } else {
            output.push_str(&line.text);
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitPreference;

    fn place_report() -> WeatherReport {
        WeatherReport {
            location_label: "Paris, FR".to_string(),
            timestamp: "2024-05-01 12:30:00".to_string(),
            temperature: 18.5,
            unit_symbol: "°C".to_string(),
            condition_description: "Clear Sky".to_string(),
            humidity_percent: 40.0,
            wind_speed: 3.2,
            units: UnitPreference::Metric,
            is_postal_lookup: false,
            state: Some("Ile-de-France".to_string()),
            city: Some("Paris".to_string()),
            locality: None,
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("clear sky"), "Clear Sky");
        assert_eq!(title_case("light intensity drizzle"), "Light Intensity Drizzle");
        assert_eq!(title_case("OVERCAST clouds"), "Overcast Clouds");
        assert_eq!(title_case("thunderstorm/rain"), "Thunderstorm/Rain");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_render_place_report() {
        let text = render_plain(&place_report());
        assert_eq!(
            text,
            "Location: Paris, FR\n\
             State: Ile-de-France\n\
             City: Paris\n\
             Locality: N/A\n\
             Date & Time: 2024-05-01 12:30:00\n\
             \n\
             Temperature: 18.5°C\n\
             Weather: Clear Sky\n\
             Humidity: 40%\n\
             Wind Speed: 3.2 m/s"
        );
    }

    #[test]
    fn test_render_postal_report() {
        let report = WeatherReport {
            location_label: "New York, United States".to_string(),
            temperature: 71.0,
            unit_symbol: "°F".to_string(),
            units: UnitPreference::Imperial,
            is_postal_lookup: true,
            state: None,
            city: None,
            ..place_report()
        };
        let lines = render_lines(&report);
        assert_eq!(lines[0].text, "Address: New York, United States");
        assert_eq!(lines[1].text, "Date & Time: 2024-05-01 12:30:00");
        assert!(lines.iter().all(|l| !l.text.starts_with("State:")));
        assert_eq!(lines[3].text, "Temperature: 71°F");
        assert_eq!(lines[6].text, "Wind Speed: 3.2 mph");
    }

    #[test]
    fn test_only_readings_are_emphasized() {
        let emphasized: Vec<String> = render_lines(&place_report())
            .into_iter()
            .filter(|l| l.emphasized)
            .map(|l| l.text)
            .collect();
        assert_eq!(emphasized.len(), 4);
        assert!(emphasized[0].starts_with("Temperature:"));
        assert!(emphasized[3].starts_with("Wind Speed:"));

        let markdown = render_markdown(&place_report());
        assert!(markdown.contains("**Humidity: 40%**"));
        assert!(markdown.contains("Location: Paris, FR\n"));
    }
}
