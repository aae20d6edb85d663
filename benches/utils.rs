use sounding_params::{Profile, MISSING};
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

pub fn load_all_test_files() -> [Profile; 2] {
    let prof1 = load_test_file("standard.csv");
    let prof2 = load_test_file("missing_surface.csv");

    [prof1, prof2]
}

fn load_test_file(fname: &str) -> Profile {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_test_csv_profile(&test_path)
}

fn load_test_csv_profile(location: &PathBuf) -> Profile {
    let mut f = File::open(location).unwrap_or_else(|_| panic!("Error opening {:?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading {:?}", location));

    let mut press: Vec<f64> = vec![];
    let mut height: Vec<f64> = vec![];
    let mut temp: Vec<f64> = vec![];
    let mut dp: Vec<f64> = vec![];
    let mut wdir: Vec<f64> = vec![];
    let mut wspd: Vec<f64> = vec![];

    for line in contents.lines() {
        if line.starts_with("### Expected Values ###") {
            break;
        }
        if line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 6 {
            continue;
        }
        let parse = |i: usize| f64::from_str(tokens[i].trim()).unwrap_or(MISSING);

        press.push(parse(0));
        height.push(parse(1));
        temp.push(parse(2));
        dp.push(parse(3));
        wdir.push(parse(4));
        wspd.push(parse(5));
    }

    Profile::builder()
        .with_pressure(press)
        .with_height(height)
        .with_temperature(temp)
        .with_dew_point(dp)
        .with_wind_spd_dir(wdir, wspd)
        .build()
        .unwrap()
}
