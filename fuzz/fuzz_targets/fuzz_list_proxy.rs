#![no_main]

//! Drive a `ListProxy` with random operations and compare every step with a
//! plain `Vec` model of the same rows.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use propbind_core::{IndexError, ListProxy, Row};
use propbind_widgets::{ListModel, Variant};

#[derive(Debug, Arbitrary)]
enum Op {
    SetLabels(Vec<u8>),
    SetData(Vec<Option<i8>>),
    Push(u8, Option<i8>),
    Pop(u8),
    SetLabel(u8, u8),
    SetDatum(u8, Option<i8>),
    Limit(Option<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    seed: Vec<u8>,
    ops: Vec<Op>,
}

#[derive(Default)]
struct Shadow {
    rows: Vec<Row>,
    limit: Option<usize>,
}

impl Shadow {
    fn append(&mut self) -> Result<usize, IndexError> {
        let row = self.rows.len();
        if self.limit.is_some_and(|limit| row >= limit) {
            return Err(IndexError::InsertRejected { row });
        }
        self.rows.push(Row::default());
        Ok(row)
    }

    fn assign<T>(
        &mut self,
        values: &[T],
        mut write: impl FnMut(&mut Row, Option<&T>),
    ) -> Result<(), IndexError> {
        let ct = self.rows.len();
        for (i, value) in values.iter().enumerate() {
            if i >= ct {
                self.append()?;
            }
            write(&mut self.rows[i], Some(value));
        }
        for row in self.rows.iter_mut().take(ct).skip(values.len()) {
            write(row, None);
        }
        Ok(())
    }
}

fn label(byte: u8) -> String {
    format!("r{byte}")
}

fn datum(value: Option<i8>) -> Option<Variant> {
    value.map(Variant::from)
}

fuzz_target!(|input: Input| {
    let model = ListModel::from_labels(input.seed.iter().take(32).map(|&b| label(b)));
    let proxy = ListProxy::new(&model);
    let mut shadow = Shadow {
        rows: input
            .seed
            .iter()
            .take(32)
            .map(|&b| Row::new(label(b), None))
            .collect(),
        limit: None,
    };

    for op in input.ops.into_iter().take(64) {
        match op {
            Op::SetLabels(values) => {
                let values: Vec<String> = values.into_iter().take(32).map(label).collect();
                let got = proxy.set_labels(values.iter().cloned());
                let want = shadow.assign(&values, |row, value| {
                    row.label = value.cloned().unwrap_or_default();
                });
                assert_eq!(got, want);
            }
            Op::SetData(values) => {
                let values: Vec<Option<i8>> = values.into_iter().take(32).collect();
                let got = proxy.set_data(values.iter().map(|&v| datum(v)));
                let want = shadow.assign(&values, |row, value| {
                    row.data = value.and_then(|&v| datum(v));
                });
                assert_eq!(got, want);
            }
            Op::Push(byte, value) => {
                let got = proxy.push(label(byte), datum(value)).map(|row| row.index());
                let want = shadow.append().inspect(|&row| {
                    shadow.rows[row] = Row::new(label(byte), datum(value));
                });
                assert_eq!(got, want);
            }
            Op::Pop(index) => {
                let index = usize::from(index);
                let got = proxy.pop(index);
                let want = if index < shadow.rows.len() {
                    Ok(shadow.rows.remove(index))
                } else {
                    Err(IndexError::RemoveRejected { index })
                };
                assert_eq!(got, want);
            }
            Op::SetLabel(index, byte) => {
                let index = usize::from(index);
                match proxy.at(index) {
                    Ok(row) => {
                        assert_eq!(row.set_label(label(byte)), Ok(()));
                        shadow.rows[index].label = label(byte);
                    }
                    Err(err) => {
                        assert!(index >= shadow.rows.len());
                        assert_eq!(
                            err,
                            IndexError::OutOfRange {
                                index,
                                len: shadow.rows.len()
                            }
                        );
                    }
                }
            }
            Op::SetDatum(index, value) => {
                let index = usize::from(index);
                if let Some(row) = proxy.get(index) {
                    assert_eq!(row.set_data(datum(value)), Ok(()));
                    shadow.rows[index].data = datum(value);
                } else {
                    assert!(index >= shadow.rows.len());
                }
            }
            Op::Limit(limit) => {
                let limit = limit.map(usize::from);
                model.set_row_limit(limit);
                shadow.limit = limit;
            }
        }

        assert_eq!(proxy.len(), shadow.rows.len());
        assert_eq!(proxy.rows(), shadow.rows);
    }
});
