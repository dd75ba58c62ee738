pub mod area_set;
pub mod validator;
pub mod value_objects;
