use approx::assert_abs_diff_eq;
use metfor::{Quantity, WindUV};
use sounding_params::{define_parcel, lift_parcel, Analysis, ParcelKind, Profile, ProfileIndex};
use std::collections::HashMap;

const TOL: f64 = 1.0e-4;

#[allow(dead_code)]
pub fn test_surface_parcel(prof: &Profile, fvals: &HashMap<String, Vec<f64>>) {
    let pcl = define_parcel(prof, ParcelKind::Surface).unwrap();
    let sfc_p = prof.surface_pressure().into_option().unwrap();
    assert_abs_diff_eq!(pcl.pressure.unpack(), sfc_p.unpack(), epsilon = TOL);

    let pcl = lift_parcel(prof, pcl);

    if let Some(vals) = fvals.get("surface lcl height") {
        let h = pcl.lcl_height.into_option().unwrap();
        assert_abs_diff_eq!(h.unpack(), vals[0], epsilon = 1.0e-2);
    }

    if let Some(vals) = fvals.get("surface li5") {
        let li5 = pcl.li5.into_option().unwrap();
        assert_abs_diff_eq!(li5.unpack(), vals[0], epsilon = TOL);
    }

    if let Some(vals) = fvals.get("surface li3") {
        let li3 = pcl.li3.into_option().unwrap();
        assert_abs_diff_eq!(li3.unpack(), vals[0], epsilon = TOL);
    }
}

#[allow(dead_code)]
pub fn test_analysis(prof: Profile, fvals: &HashMap<String, Vec<f64>>) {
    let anal = Analysis::new(prof).fill_in_missing_analysis();

    if let Some(vals) = fvals.get("k index") {
        let k = anal.get_profile_index(ProfileIndex::K).unwrap();
        assert_abs_diff_eq!(k, vals[0], epsilon = TOL);
    }

    if let Some(vals) = fvals.get("total totals") {
        let tt = anal.get_profile_index(ProfileIndex::TotalTotals).unwrap();
        assert_abs_diff_eq!(tt, vals[0], epsilon = TOL);
    }

    if let Some(vals) = fvals.get("mean wind") {
        let WindUV { u, v } = anal.get_mean_wind().unwrap();
        assert_abs_diff_eq!(u.unpack(), vals[0], epsilon = TOL);
        assert_abs_diff_eq!(v.unpack(), vals[1], epsilon = TOL);
    }

    assert!(anal.get_surface_parcel_analysis().is_some());
}
