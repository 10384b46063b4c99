pub fn s() -> f32 {
    8.0
}

pub fn m() -> f32 {
    12.0
}

pub fn l() -> f32 {
    20.0
}

pub fn xl() -> f32 {
    28.0
}
