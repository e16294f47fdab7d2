use crate::adapters::outbound::formatters::CardFormatter;
use crate::ports::outbound::{OutputPresenter, ViewFrame, ViewRenderer};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// TerminalView adapter for the ViewRenderer port
///
/// - `Loading`: indicatif spinner on stderr with the localized loading text
/// - `Error`: spinner cleared, error panel on stderr
/// - `Loaded`: spinner cleared, layout shell and cards through the presenter
pub struct TerminalView<P: OutputPresenter> {
    formatter: CardFormatter,
    presenter: P,
    show_spinner: bool,
    spinner: Option<ProgressBar>,
}

impl<P: OutputPresenter> TerminalView<P> {
    pub fn new(formatter: CardFormatter, presenter: P) -> Self {
        Self {
            formatter,
            presenter,
            show_spinner: true,
            spinner: None,
        }
    }

    /// Disables the loading spinner (non-interactive runs)
    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    fn start_spinner(&mut self) -> Result<()> {
        if !self.show_spinner || self.spinner.is_some() {
            return Ok(());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        spinner.set_message(self.formatter.catalog().loading.clone());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
        Ok(())
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl<P: OutputPresenter> ViewRenderer for TerminalView<P> {
    fn render(&mut self, frame: ViewFrame<'_>) -> Result<()> {
        match frame {
            ViewFrame::Loading => self.start_spinner(),
            ViewFrame::Error { message } => {
                self.stop_spinner();
                eprintln!("{}", self.formatter.format_error(message));
                Ok(())
            }
            ViewFrame::Loaded { cards } => {
                self.stop_spinner();
                self.presenter.present(&self.formatter.format_page(cards))
            }
        }
    }
}

impl<P: OutputPresenter> Drop for TerminalView<P> {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::CardView;
    use crate::i18n::{Catalog, Locale};
    use crate::wanted_listing::domain::WantedPerson;
    use crate::wanted_listing::services::KeyedList;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CapturingPresenter {
        output: Rc<RefCell<Vec<String>>>,
    }

    impl OutputPresenter for CapturingPresenter {
        fn present(&self, content: &str) -> Result<()> {
            self.output.borrow_mut().push(content.to_string());
            Ok(())
        }
    }

    fn view(presenter: CapturingPresenter) -> TerminalView<CapturingPresenter> {
        let formatter = CardFormatter::plain(Catalog::load(Locale::En).unwrap());
        TerminalView::new(formatter, presenter).without_spinner()
    }

    #[test]
    fn test_loading_frame_presents_nothing() {
        let presenter = CapturingPresenter::default();
        let mut view = view(presenter.clone());

        view.render(ViewFrame::Loading).unwrap();

        assert!(presenter.output.borrow().is_empty());
    }

    #[test]
    fn test_error_frame_presents_no_cards() {
        let presenter = CapturingPresenter::default();
        let mut view = view(presenter.clone());

        view.render(ViewFrame::Loading).unwrap();
        view.render(ViewFrame::Error { message: "boom" }).unwrap();

        assert!(presenter.output.borrow().is_empty());
    }

    #[test]
    fn test_loaded_frame_presents_page() {
        let presenter = CapturingPresenter::default();
        let mut view = view(presenter.clone());
        let mut list = KeyedList::new();
        list.reconcile(vec![CardView::from_person(&WantedPerson::new(
            "u1",
            "JOHN DOE",
            "1990-01-15",
        ))]);

        view.render(ViewFrame::Loaded {
            cards: list.entries(),
        })
        .unwrap();

        let output = presenter.output.borrow();
        assert_eq!(output.len(), 1);
        assert!(output[0].contains("JOHN DOE"));
        assert!(output[0].contains("January 15, 1990"));
    }

    #[test]
    fn test_spinner_lifecycle_does_not_panic() {
        let formatter = CardFormatter::plain(Catalog::load(Locale::En).unwrap());
        let mut view = TerminalView::new(formatter, CapturingPresenter::default());
        view.render(ViewFrame::Loading).unwrap();
        view.render(ViewFrame::Error { message: "boom" }).unwrap();
    }
}
