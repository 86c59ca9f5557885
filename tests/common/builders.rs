//! NC1 document builders.
//!
//! `Nc1Builder` writes a DSTV header with the fields on the lines the reader
//! expects, followed by an optional `BO` block.

#![allow(dead_code)]

/// Builds NC1 source text for tests
#[derive(Debug, Clone)]
pub struct Nc1Builder {
    partmark: String,
    quantity: String,
    profile: String,
    code: String,
    length: f64,
    /// DSTV "profile height" line
    profile_height: f64,
    /// DSTV "flange width" line
    flange_width: f64,
    flange_thickness: f64,
    web_thickness: f64,
    holes: Vec<String>,
    markers: bool,
    trailer: Vec<String>,
}

impl Nc1Builder {
    /// An IPE200 beam, 1200 mm long, without holes
    pub fn new(partmark: &str) -> Self {
        Self {
            partmark: partmark.to_string(),
            quantity: "1".to_string(),
            profile: "IPE200".to_string(),
            code: "I".to_string(),
            length: 1200.0,
            profile_height: 200.0,
            flange_width: 100.0,
            flange_thickness: 8.5,
            web_thickness: 5.6,
            holes: Vec::new(),
            markers: true,
            trailer: Vec::new(),
        }
    }

    pub fn quantity(mut self, quantity: &str) -> Self {
        self.quantity = quantity.to_string();
        self
    }

    pub fn profile(mut self, profile: &str, code: &str) -> Self {
        self.profile = profile.to_string();
        self.code = code.to_string();
        self
    }

    pub fn length(mut self, mm: f64) -> Self {
        self.length = mm;
        self
    }

    pub fn section(mut self, profile_height: f64, flange_width: f64) -> Self {
        self.profile_height = profile_height;
        self.flange_width = flange_width;
        self
    }

    /// Add a hole line, e.g. `"v 100.00s 50.00 22.00"`
    pub fn hole(mut self, line: &str) -> Self {
        self.holes.push(line.to_string());
        self
    }

    /// Leave out the `BO` and `EN` marker lines
    pub fn without_markers(mut self) -> Self {
        self.markers = false;
        self
    }

    /// Append a line after the hole block (before `EN`)
    pub fn trailer(mut self, line: &str) -> Self {
        self.trailer.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = vec![
            "ST".to_string(),
            "  ORDER-7".to_string(),
            "  DRW-7".to_string(),
            "  1".to_string(),
            format!("  {}", self.partmark),
            "  S355J2".to_string(),
            format!("  {}", self.quantity),
            format!("  {}", self.profile),
            format!("  {}", self.code),
            format!("  {:>10.2}", self.length),
            format!("  {:>10.2}", self.length),
            format!("  {:>10.2}", self.profile_height),
            format!("  {:>10.2}", self.flange_width),
            format!("  {:>10.2}", self.flange_thickness),
            format!("  {:>10.2}", self.web_thickness),
            "       12.00".to_string(),
        ];

        if self.markers {
            lines.push("BO".to_string());
        }
        for hole in &self.holes {
            lines.push(format!("  {}", hole));
        }
        lines.extend(self.trailer.iter().cloned());
        if self.markers {
            lines.push("EN".to_string());
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
