use anyhow::Result;
use serde::Serialize;

use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;

    /// Like [`Renderer::render`], but long text output goes through a pager.
    fn render_paged<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView;
}
