use reaction_physics::KineticsParams;
use reaction_simulation::{InitialCounts, SpeciesCounts, MAX_REACTANTS};

/// Values normally owned by the sliders, buttons and hidden keys
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    pub temperature_c: f32,
    pub h2_count: u32,
    pub cl2_count: u32,
    /// Instructor diagnostic overlay (key P)
    pub show_diagnostics: bool,
    /// Near-frozen regime at low temperature (key T)
    pub trap_mode: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            temperature_c: 50.0,
            h2_count: 6,
            cl2_count: 10,
            show_diagnostics: false,
            trap_mode: false,
        }
    }
}

impl UiState {
    /// Slider range of the temperature control
    pub fn set_temperature(&mut self, temperature_c: f32, kinetics: &KineticsParams) {
        self.temperature_c = kinetics.sanitize_temperature(temperature_c);
    }

    pub fn set_h2_count(&mut self, count: u32) {
        self.h2_count = count.min(MAX_REACTANTS - 1);
        self.set_cl2_count(self.cl2_count);
    }

    /// Cl2 is always kept in excess of H2
    pub fn set_cl2_count(&mut self, count: u32) {
        self.cl2_count = count.clamp(self.h2_count + 1, MAX_REACTANTS);
    }

    pub fn toggle_diagnostics(&mut self) {
        self.show_diagnostics = !self.show_diagnostics;
    }

    pub fn toggle_trap_mode(&mut self) {
        self.trap_mode = !self.trap_mode;
    }

    /// Hidden keyboard shortcuts; returns true when the key was handled
    pub fn handle_key(&mut self, key: char) -> bool {
        match key.to_ascii_lowercase() {
            'p' => {
                self.toggle_diagnostics();
                true
            }
            't' => {
                self.toggle_trap_mode();
                true
            }
            _ => false,
        }
    }
}

/// Text of the diagnostic overlay
pub fn diagnostic_lines(
    ui: &UiState,
    initial: InitialCounts,
    counts: SpeciesCounts,
    reactions: u32,
) -> Vec<String> {
    vec![
        "Instructor diagnostic (P)".to_string(),
        format!(
            "T = {:.0} °C   |   Trap mode (T): {}",
            ui.temperature_c,
            if ui.trap_mode { "ON" } else { "OFF" }
        ),
        format!(
            "Initial: H2={}   Cl2={}",
            initial.reactant_a, initial.reactant_b
        ),
        format!(
            "Remaining: H2={}   Cl2={}",
            counts.reactant_a, counts.reactant_b
        ),
        format!("Product: HCl={}   |   Reaction events: {}", counts.products, reactions),
    ]
}
