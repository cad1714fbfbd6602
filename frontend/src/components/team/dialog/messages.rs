#[derive(Clone)]
pub enum Msg {
    FieldChanged { name: &'static str, value: String },
    Submit,
    Cancel,
}
