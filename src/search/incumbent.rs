/** size of the best clique found so far during one search.
Only grows: `improve` writes a value only if it is strictly larger than the current one.
*/
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    /// best size found
    best: usize,
    /// successive best sizes
    primal_list: Vec<usize>,
}

impl Incumbent {
    /// fresh incumbent (size 0)
    pub fn new() -> Self { Self::default() }

    /// best size found so far
    pub fn best(&self) -> usize { self.best }

    /// true iff a relaxation bound can still lead to a larger clique
    pub fn can_be_improved_by(&self, bound:f64) -> bool { bound > self.best as f64 }

    /// records a new clique size. Returns true iff it improved the incumbent.
    pub fn improve(&mut self, size:usize) -> bool {
        if size > self.best {
            self.best = size;
            self.primal_list.push(size);
            true
        } else {
            false
        }
    }

    /// every value taken by the incumbent (in order)
    pub fn primal_list(&self) -> &[usize] { &self.primal_list }
}
