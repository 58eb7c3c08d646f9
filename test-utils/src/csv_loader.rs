use std::error::Error;

use csv::Reader;
use num_enum::TryFromPrimitive;

/// Columns of a session recorded in data-acquisition mode.
#[repr(usize)]
#[derive(Debug, Clone, Copy, TryFromPrimitive)]
pub enum CsvFileColum {
    XAccel,
    YAccel,
    ZAccel,
    XGyro,
    YGyro,
    ZGyro,
}

impl From<CsvFileColum> for usize {
    fn from(value: CsvFileColum) -> Self {
        value as usize
    }
}

#[derive(Clone, Debug, Default)]
pub struct CsvColumnMapper {
    columns: Vec<usize>,
}

impl CsvColumnMapper {
    pub fn new() -> Self {
        Self { columns: vec![] }
    }

    pub fn columns(&self) -> Vec<usize> {
        self.columns.clone()
    }

    pub fn add_accel(&mut self) -> &mut Self {
        self.columns.push(CsvFileColum::XAccel.into());
        self.columns.push(CsvFileColum::YAccel.into());
        self.columns.push(CsvFileColum::ZAccel.into());
        self
    }

    pub fn add_gyro(&mut self) -> &mut Self {
        self.columns.push(CsvFileColum::XGyro.into());
        self.columns.push(CsvFileColum::YGyro.into());
        self.columns.push(CsvFileColum::ZGyro.into());
        self
    }
}

pub fn load_csv(file_path: &str) -> Result<Vec<Vec<f64>>, Box<dyn Error>> {
    let mut rdr = Reader::from_path(file_path)?;
    let mut data = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row: Vec<f64> = record
            .iter()
            .filter_map(|s| s.trim().parse::<f64>().ok())
            .collect();
        data.push(row);
    }

    Ok(data)
}

pub fn load_csv_columns<T: TryFrom<Vec<f64>>>(
    file_path: &str,
    columns: &[usize],
) -> Result<Vec<T>, Box<dyn Error>> {
    if columns.is_empty() {
        return Err("No columns provided".into());
    }

    let data = load_csv(file_path)?;

    let result = data
        .into_iter()
        .map(|rows| {
            columns
                .iter()
                .map(|&i| {
                    rows.get(i)
                        .ok_or_else(|| format!("Column index {} out of bounds", i).into())
                        .copied()
                })
                .collect::<Result<Vec<f64>, Box<dyn Error>>>()
        })
        .collect::<Result<Vec<Vec<f64>>, Box<dyn Error>>>()?
        .into_iter()
        .map(|f64_values| {
            T::try_from(f64_values).map_err(|_| "Failed to convert to T".to_string().into())
        })
        .collect::<Result<Vec<T>, Box<dyn Error>>>()?;

    Ok(result)
}

/// Loads every row of a recorded session as an [`ImuSample`](common::ImuSample).
pub fn load_samples(file_path: &str) -> Result<Vec<common::ImuSample>, Box<dyn Error>> {
    let mut mapper = CsvColumnMapper::new();
    mapper.add_accel().add_gyro();
    load_csv_columns(file_path, &mapper.columns())
}
