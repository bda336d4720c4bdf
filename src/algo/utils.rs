use crate::{geometry::traits::*, helpers::aliases::Vec3};

pub fn barycenter<'a, R, TPointsIter>(points: TPointsIter) -> Vec3<R>
where
    R: RealNumber,
    TPointsIter: Iterator<Item = &'a Vec3<R>>,
{
    let mut barycenter = Vec3::zeros();
    let mut size = 0;

    for p in points {
        barycenter += p;
        size += 1;
    }

    barycenter /= R::from_usize(size).unwrap();

    barycenter
}
