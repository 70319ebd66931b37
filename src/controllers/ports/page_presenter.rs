use crate::core::data::plot_data::PlotData;
use std::io::Write;

/// Rendering collaborator: turns assembled plot data into the final
/// document. The core never concerns itself with markup.
pub trait PagePresenterPort {
    fn present(&self, plot: &PlotData, out: &mut impl Write) -> std::io::Result<()>;
}
