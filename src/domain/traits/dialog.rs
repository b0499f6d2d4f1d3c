/// Dialog trait - abstraction for whatever shows results to the user
/// and collects their answers
pub trait Dialog {
    /// Show a block of text
    fn show(&self, text: &str);

    /// Ask for one line of input; `None` when input is exhausted
    fn read_line(&self, prompt: &str) -> Option<String>;
}
