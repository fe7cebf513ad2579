pub mod contact;
pub mod point;
pub mod style;

pub use contact::{ContactCard, SocialLink};
pub use point::Point;
pub use style::{BorderSticker, CardStyle, CenterMark, ColorTheme, FrameShape, NamedIcon, Rgb};
