//! Standard unit definitions, grouped by category in display order
//!
//! Base units: meter, gram, liter, kelvin, second, meter_per_second,
//! square_meter, byte, joule, pascal.

use crate::{Category, Unit};

/// The standard catalog contents
pub fn standard_units() -> Vec<(Category, Vec<Unit>)> {
    vec![
        (Category::Length, length_units()),
        (Category::Mass, mass_units()),
        (Category::Volume, volume_units()),
        (Category::Temperature, temperature_units()),
        (Category::Time, time_units()),
        (Category::Speed, speed_units()),
        (Category::Area, area_units()),
        (Category::Data, data_units()),
        (Category::Energy, energy_units()),
        (Category::Pressure, pressure_units()),
    ]
}

fn length_units() -> Vec<Unit> {
    use crate::Category::Length as L;
    vec![
        Unit::new("meter", "m", "meter", L, 1.0).aliased(&["meters", "metre", "metres"]),
        Unit::new("kilometer", "km", "kilometer", L, 1000.0)
            .aliased(&["kilometers", "kilometre", "kilometres"]),
        Unit::new("centimeter", "cm", "centimeter", L, 0.01)
            .aliased(&["centimeters", "centimetre", "centimetres"]),
        Unit::new("millimeter", "mm", "millimeter", L, 0.001)
            .aliased(&["millimeters", "millimetre", "millimetres"]),
        Unit::new("mile", "mi", "mile", L, 1609.344).aliased(&["miles"]),
        Unit::new("yard", "yd", "yard", L, 0.9144).aliased(&["yards"]),
        Unit::new("foot", "ft", "foot", L, 0.3048).aliased(&["feet"]),
        Unit::new("inch", "in", "inch", L, 0.0254).aliased(&["inches"]),
    ]
}

fn mass_units() -> Vec<Unit> {
    use crate::Category::Mass as M;
    vec![
        Unit::new("gram", "g", "gram", M, 1.0).aliased(&["grams", "gramme"]),
        Unit::new("kilogram", "kg", "kilogram", M, 1000.0).aliased(&["kilograms", "kilo", "kilos"]),
        Unit::new("milligram", "mg", "milligram", M, 0.001).aliased(&["milligrams"]),
        Unit::new("pound", "lb", "pound", M, 453.59237).aliased(&["pounds", "lbs"]),
        Unit::new("ounce", "oz", "ounce", M, 28.349523125).aliased(&["ounces"]),
        // metric ton
        Unit::new("ton", "t", "metric ton", M, 1_000_000.0)
            .aliased(&["tons", "tonne", "tonnes", "metric ton"]),
    ]
}

fn volume_units() -> Vec<Unit> {
    use crate::Category::Volume as V;
    vec![
        Unit::new("liter", "L", "liter", V, 1.0).aliased(&["liters", "litre", "litres"]),
        Unit::new("milliliter", "mL", "milliliter", V, 0.001)
            .aliased(&["milliliters", "millilitre", "millilitres"]),
        Unit::new("cubic_meter", "m³", "cubic meter", V, 1000.0).aliased(&["m3", "cubic meters"]),
        Unit::new("gallon", "gal", "US gallon", V, 3.785411784).aliased(&["gallons"]),
        Unit::new("quart", "qt", "US quart", V, 0.946352946).aliased(&["quarts"]),
        Unit::new("pint", "pt", "US pint", V, 0.473176473).aliased(&["pints"]),
        Unit::new("cup", "cup", "US cup", V, 0.2365882365).aliased(&["cups"]),
        Unit::new("fluid_ounce", "fl oz", "US fluid ounce", V, 0.0295735295625)
            .aliased(&["floz", "fluid ounces"]),
    ]
}

fn temperature_units() -> Vec<Unit> {
    use crate::Category::Temperature as T;
    vec![
        // Kelvin is the base unit
        Unit::new("kelvin", "K", "kelvin", T, 1.0).aliased(&["kelvins"]),
        // K = C + 273.15
        Unit::with_offset("celsius", "°C", "degree Celsius", T, 1.0, 0.0, 273.15)
            .aliased(&["degC", "C", "degrees celsius"]),
        // K = (F - 32) * 5/9 + 273.15
        Unit::with_offset("fahrenheit", "°F", "degree Fahrenheit", T, 5.0 / 9.0, 32.0, 273.15)
            .aliased(&["degF", "F", "degrees fahrenheit"]),
    ]
}

fn time_units() -> Vec<Unit> {
    use crate::Category::Time as T;
    vec![
        Unit::new("second", "s", "second", T, 1.0).aliased(&["seconds", "sec", "secs"]),
        Unit::new("minute", "min", "minute", T, 60.0).aliased(&["minutes", "mins"]),
        Unit::new("hour", "h", "hour", T, 3600.0).aliased(&["hours", "hr", "hrs"]),
        Unit::new("day", "d", "day", T, 86_400.0).aliased(&["days"]),
        Unit::new("week", "wk", "week", T, 604_800.0).aliased(&["weeks"]),
        // 30 days
        Unit::new("month", "mo", "month", T, 2_592_000.0).aliased(&["months"]),
        // 365 days
        Unit::new("year", "yr", "year", T, 31_536_000.0).aliased(&["years", "y"]),
    ]
}

fn speed_units() -> Vec<Unit> {
    use crate::Category::Speed as S;
    vec![
        Unit::new("meter_per_second", "m/s", "meter per second", S, 1.0)
            .aliased(&["mps", "meters per second"]),
        Unit::new("kilometer_per_hour", "km/h", "kilometer per hour", S, 1.0 / 3.6)
            .aliased(&["kph", "kmh", "kilometers per hour"]),
        Unit::new("mile_per_hour", "mph", "mile per hour", S, 0.44704)
            .aliased(&["mi/h", "miles per hour"]),
        Unit::new("knot", "kn", "knot", S, 1852.0 / 3600.0).aliased(&["knots", "kt"]),
    ]
}

fn area_units() -> Vec<Unit> {
    use crate::Category::Area as A;
    vec![
        Unit::new("square_meter", "m²", "square meter", A, 1.0)
            .aliased(&["m2", "sq m", "square meters"]),
        Unit::new("square_kilometer", "km²", "square kilometer", A, 1_000_000.0)
            .aliased(&["km2", "sq km", "square kilometers"]),
        Unit::new("hectare", "ha", "hectare", A, 10_000.0).aliased(&["hectares"]),
        Unit::new("acre", "ac", "acre", A, 4046.8564224).aliased(&["acres"]),
        Unit::new("square_foot", "ft²", "square foot", A, 0.09290304)
            .aliased(&["ft2", "sq ft", "square feet"]),
        Unit::new("square_inch", "in²", "square inch", A, 0.00064516)
            .aliased(&["in2", "sq in", "square inches"]),
    ]
}

fn data_units() -> Vec<Unit> {
    use crate::Category::Data as D;
    // Binary multiples: 1 KB = 1024 B
    vec![
        Unit::new("bit", "bit", "bit", D, 0.125).aliased(&["bits"]),
        Unit::new("byte", "B", "byte", D, 1.0).aliased(&["bytes"]),
        Unit::new("kilobyte", "KB", "kilobyte", D, 1024.0).aliased(&["kilobytes"]),
        Unit::new("megabyte", "MB", "megabyte", D, 1_048_576.0).aliased(&["megabytes"]),
        Unit::new("gigabyte", "GB", "gigabyte", D, 1_073_741_824.0).aliased(&["gigabytes"]),
        Unit::new("terabyte", "TB", "terabyte", D, 1_099_511_627_776.0).aliased(&["terabytes"]),
    ]
}

fn energy_units() -> Vec<Unit> {
    use crate::Category::Energy as E;
    vec![
        Unit::new("joule", "J", "joule", E, 1.0).aliased(&["joules"]),
        Unit::new("kilojoule", "kJ", "kilojoule", E, 1000.0).aliased(&["kilojoules"]),
        Unit::new("calorie", "cal", "calorie", E, 4.184).aliased(&["calories"]),
        Unit::new("kilocalorie", "kcal", "kilocalorie", E, 4184.0).aliased(&["kilocalories"]),
        Unit::new("watt_hour", "Wh", "watt-hour", E, 3600.0).aliased(&["watt hours"]),
        Unit::new("kilowatt_hour", "kWh", "kilowatt-hour", E, 3_600_000.0)
            .aliased(&["kilowatt hours"]),
    ]
}

fn pressure_units() -> Vec<Unit> {
    use crate::Category::Pressure as P;
    vec![
        Unit::new("pascal", "Pa", "pascal", P, 1.0).aliased(&["pascals"]),
        Unit::new("kilopascal", "kPa", "kilopascal", P, 1000.0).aliased(&["kilopascals"]),
        Unit::new("bar", "bar", "bar", P, 100_000.0).aliased(&["bars"]),
        Unit::new("atmosphere", "atm", "standard atmosphere", P, 101_325.0)
            .aliased(&["atmospheres"]),
        Unit::new("psi", "psi", "pound per square inch", P, 6894.757293168)
            .aliased(&["pounds per square inch"]),
    ]
}
