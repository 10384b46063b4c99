use crate::volume::Volume;

pub const FILLED: char = '█';
pub const EMPTY: char = '░';

pub const INSTRUCTIONS: &str = "Press the up and down arrow keys or click the buttons";

pub fn label(volume: &Volume) -> String {
    let filled = usize::from(volume.level());
    let empty = usize::from(volume.max() - volume.level());

    let mut bar = String::with_capacity((filled + empty) * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, empty));

    format!("Volume: {}  {bar}", volume.level())
}
