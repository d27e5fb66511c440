use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const CHAIN_HEADER: Style = Style::new().bold();
pub const GROUP_FRAME: Style = Style::new().blue().bold();
