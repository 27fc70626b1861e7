mod test_properties;
pub mod test_util;
