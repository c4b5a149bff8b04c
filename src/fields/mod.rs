mod caption;
mod categories;
mod counter;
mod title;

pub(crate) use caption::CaptionField;
pub(crate) use categories::CategoryPicker;
pub(crate) use counter::CounterText;
pub(crate) use title::TitleField;
