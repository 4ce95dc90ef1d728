mod text;
mod vector2;

pub use self::vector2::Vector2;
