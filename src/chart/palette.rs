use serde::Serialize;

/// RGB color of a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TraceColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, as written into SVG output
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Qualitative palette; cycles when there are more traces than colors
pub const PALETTE: [TraceColor; 10] = [
    TraceColor::new(0x63, 0x6E, 0xFA),
    TraceColor::new(0xEF, 0x55, 0x3B),
    TraceColor::new(0x00, 0xCC, 0x96),
    TraceColor::new(0xAB, 0x63, 0xFA),
    TraceColor::new(0xFF, 0xA1, 0x5A),
    TraceColor::new(0x19, 0xD3, 0xF3),
    TraceColor::new(0xFF, 0x66, 0x92),
    TraceColor::new(0xB6, 0xE8, 0x80),
    TraceColor::new(0xFF, 0x97, 0xFF),
    TraceColor::new(0xFE, 0xCB, 0x52),
];

/// Color for the series at `index` in input order
pub fn color_for(index: usize) -> TraceColor {
    PALETTE[index % PALETTE.len()]
}
