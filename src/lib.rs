mod drops;
mod effect;
mod legal;
mod mate;
mod movegen;
pub mod mylog;
mod promotion;
mod sfen;
mod shogi;

pub use self::drops::*;
pub use self::effect::*;
pub use self::legal::*;
pub use self::mate::*;
pub use self::movegen::*;
pub use self::promotion::*;
pub use self::sfen::*;
pub use self::shogi::*;
