use crate::models::ResponseShape;

#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub shape: ResponseShape,
}

impl AppState {
    pub fn new(shape: ResponseShape) -> Self {
        Self { shape }
    }
}
