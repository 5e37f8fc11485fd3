//! Scanlines: runs of coverage values on a single pixel row

/// Horizontal run of pixels starting at `x`, one coverage value per pixel
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Span {
    pub x: i64,
    pub len: i64,
    pub covers: Vec<u8>,
}

/// Coverage of one pixel row, as a set of Spans
#[derive(Debug,Default)]
pub struct ScanlineU8 {
    last_x: i64,
    pub spans: Vec<Span>,
    pub y: i64,
}

const LAST_X: i64 = 0x7FFF_FFF0;

impl ScanlineU8 {
    pub fn new() -> Self {
        Self { last_x: LAST_X, y: 0, spans: vec![] }
    }
    pub fn reset_spans(&mut self) {
        self.last_x = LAST_X;
        self.spans.clear();
    }
    pub fn finalize(&mut self, y: i64) {
        self.y = y;
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Add a single pixel at `x`
    pub fn add_cell(&mut self, x: i64, cover: u8) {
        match self.spans.last_mut() {
            Some(cur) if x == self.last_x + 1 => {
                cur.len += 1;
                cur.covers.push(cover);
            }
            _ => {
                self.spans.push(Span { x, len: 1, covers: vec![cover] });
            }
        }
        self.last_x = x;
    }
}
