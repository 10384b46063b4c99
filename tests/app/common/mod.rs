use volume_focus::app::{controller::ViewController, controls::Input};

/// A controller at the default ceiling of 10, starting from 5.
pub fn controller() -> ViewController {
    ViewController::new(10)
}

/// Feed every input through the controller and record the level after each.
pub fn run_script(controller: &mut ViewController, script: &[Input]) -> Vec<u8> {
    script
        .iter()
        .map(|&input| {
            controller.handle(input);
            controller.volume().level()
        })
        .collect()
}

/// Deterministic pseudo-random input script.
pub fn scripted_inputs(seed: u32, len: usize) -> Vec<Input> {
    const INPUTS: [Input; 5] = [
        Input::UpPressed,
        Input::DownPressed,
        Input::OtherKey,
        Input::UpClicked,
        Input::DownClicked,
    ];

    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            INPUTS[(state >> 16) as usize % INPUTS.len()]
        })
        .collect()
}
