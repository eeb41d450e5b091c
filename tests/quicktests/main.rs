use quickcheck::{Arbitrary, Gen};

mod ordered;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Look up the T in the data structure
    Retrieve(T),
    /// Empty the data structure
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Retrieve(T::arbitrary(g)),
            2 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
