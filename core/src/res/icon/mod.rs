use crate::bitmap::Bitmap;

pub mod bluetooth;

/// Icons compiled into the firmware image.
///
/// The table is the set of enum variants; adding an icon means adding a
/// variant and its generated module.  Lookup is an exhaustive match, so
/// there is no string key and no missing entry at runtime.
#[derive(Clone, Copy, PartialEq, Eq, strum_macros::EnumIter)]
pub enum Icon {
    Bluetooth,
}

impl Icon {
    pub fn repr(self) -> &'static str {
        match self {
            Icon::Bluetooth => "bluetooth",
        }
    }

    pub fn bitmap(self) -> &'static Bitmap<'static> {
        match self {
            Icon::Bluetooth => &bluetooth::BLUETOOTH,
        }
    }
}
