use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::solver::core::{traits::InfoPrint, Elimination};
use std::io::Write;
use std::time::Duration;

impl<T> ConfigurablePrintTarget for DefaultInfo<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

impl<T> InfoPrint<T> for DefaultInfo<T>
where
    T: FloatT,
{
    type D = DefaultProblemData<T>;
    type SE = DefaultSettings<T>;

    fn print_configuration(
        &mut self,
        settings: &DefaultSettings<T>,
        data: &DefaultProblemData<T>,
        engine: &Elimination,
    ) -> std::io::Result<()> {
        self.threads = engine.threads();

        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        let sf = &data.standard_form;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {}", data.n)?;
        writeln!(out, "  constraints   = {}", data.m)?;
        writeln!(out, "\nstandard form:")?;
        writeln!(out, "  columns       = {}", sf.ncols())?;
        writeln!(out, "    split       = {}", sf.columns.nsplit())?;
        writeln!(out, "  rows          = {}", sf.nrows())?;
        writeln!(
            out,
            "  tableau       = {} x {}",
            sf.nrows() + 1,
            sf.ncols() + sf.nrows() + 1
        )?;
        writeln!(out,)?;

        self.print_settings(settings, engine, sf.nrows(), sf.ncols())?;

        std::io::Result::Ok(())
    }

    fn print_status_header(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        //print a subheader for the iterations info
        write!(out, "iter    ")?;
        write!(out, "phase  ")?;
        write!(out, "enter     ")?;
        write!(out, "leave     ")?;
        write!(out, "objective")?;
        writeln!(out,)?;
        writeln!(
            out,
            "-------------------------------------------------------------"
        )?;
        out.flush()?;
        std::io::Result::Ok(())
    }

    fn print_status(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }
        let interval = settings.print_interval.max(1);
        if self.iterations != 1 && self.iterations % interval != 0 {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        write!(out, "{:>4}  ", self.iterations)?;
        write!(out, "{:>5}  ", self.phase)?;
        write!(out, "{:>8}  ", self.entering)?;
        write!(out, "{:>8}  ", self.leaving)?;
        write!(out, "{}", expformat!("{:+8.4e}", self.objective))?;
        writeln!(out,)?;

        std::io::Result::Ok(())
    }

    fn print_footer(&mut self, settings: &DefaultSettings<T>) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(
            out,
            "-------------------------------------------------------------"
        )?;

        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(
            out,
            "pivots = {} (phase one {})",
            self.iterations, self.phase_one_iterations
        )?;

        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;

        std::io::Result::Ok(())
    }

    fn print_target(&mut self) -> &mut dyn std::io::Write {
        &mut self.stream
    }
}

impl<T> DefaultInfo<T>
where
    T: FloatT,
{
    fn print_settings(
        &mut self,
        settings: &DefaultSettings<T>,
        engine: &Elimination,
        m: usize,
        n: usize,
    ) -> std::io::Result<()> {
        let out = &mut self.stream;

        let set = settings;

        writeln!(out, "settings:")?;

        write!(out, "  elimination: ")?;
        if engine.is_parallel() {
            write!(out, "parallel ")?;
        } else {
            write!(out, "serial ")?;
        }
        print_nthreads(out, self.threads)?;
        write!(out, ", precision: {} bit", _get_precision_string::<T>())?;
        writeln!(out)?;

        let time_lim_str = {
            if set.time_limit.is_infinite() {
                "Inf".to_string()
            } else {
                format!("{:?}", set.time_limit)
            }
        };
        writeln!(
            out,
            "  max iter = {}, time limit = {}",
            set.iteration_limit(m, n),
            time_lim_str
        )?;

        writeln!(
            out,
            "  pivot rule = {}, tol_pivot = {:.1e}",
            set.pivot_rule, set.tol_pivot
        )?;

        writeln!(out,)?;

        std::io::Result::Ok(())
    }
}

fn print_nthreads(out: &mut PrintTarget, nthreads: usize) -> std::io::Result<()> {
    match nthreads {
        0 => Ok(()),
        1 => write!(out, "(1 thread)"),
        _ => write!(out, "({nthreads} threads)"),
    }
}

fn _get_precision_string<T: FloatT>() -> String {
    (::std::mem::size_of::<T>() * 8).to_string()
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.

fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr[eidx + 1..].starts_with('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars = match (has_sign, has_short_exp) {
        (false, true) => "+0",
        (false, false) => "+",
        (true, true) => "0",
        (true, false) => "",
    };

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat("+8.0000e0".to_string()), "+8.0000e+00");
    assert_eq!(_exp_str_reformat("-1.2500e-3".to_string()), "-1.2500e-03");
    assert_eq!(_exp_str_reformat("1.0e12".to_string()), "1.0e+12");
    assert_eq!(_exp_str_reformat("inf".to_string()), "inf");
}
