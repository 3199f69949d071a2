/// Return with an error if a condition is not met.
///
/// Simplifies the pattern of checking for a condition and returning with an error.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr $(,)?) => {
        if !$cond {
            return Err($e);
        }
    };
}

// The following macros are mostly intended to serve as pseudo-documentation within tests,
// in addition to convenience/clarity

/// Assert that a [`Result`] is [`Ok`]
///
/// If the provided expresion evaulates to [`Ok`], then the
/// macro returns the value contained within the [`Ok`]. If
/// the [`Result`] is an [`Err`] then the macro will [`panic`]
/// with a message that includes the expression and the error.
///
/// This function was vendored from: https://docs.rs/assert_ok/1.0.2/assert_ok/
#[macro_export]
macro_rules! assert_ok {
    ( $x:expr ) => {
        match $x {
            std::result::Result::Ok(v) => v,
            std::result::Result::Err(e) => {
                panic!("Error calling {}: {:?}", stringify!($x), e);
            }
        }
    };
}

/// Assert that a [`Result`] is [`Err`] and matches a desired error
#[macro_export]
macro_rules! assert_err {
    ( $x:expr, $e:expr ) => {
        match $x {
            std::result::Result::Err(e) => {
                if $e != e {
                    panic!("Expected error {}, got {:?} instead", stringify!($e), e)
                }
            }
            std::result::Result::Ok(v) => {
                panic!(
                    "Expected error when calling {}, got {:?} instead",
                    stringify!($x),
                    v
                );
            }
        }
    };
}

/// Assert that the result of a `try_*` client call failed with the given contract error.
#[macro_export]
macro_rules! assert_contract_err {
    ( $given:expr, $expected:expr ) => {
        match $given {
            std::result::Result::Ok(v) => {
                panic!("Expected error {:?}, got {:?} instead", $expected, v)
            }
            std::result::Result::Err(std::result::Result::Ok(e)) => {
                if e != $expected {
                    panic!("Expected error {:?}, got {:?} instead", $expected, e)
                }
            }
            std::result::Result::Err(std::result::Result::Err(e)) => {
                panic!("Expected error {:?}, got invoke error {:?} instead", $expected, e)
            }
        }
    };
}

/// Invoke a `try_*` client method with auth mocked for `$caller` only, and assert it succeeds.
#[macro_export]
macro_rules! assert_invoke_auth_ok {
    ( $caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? ) ) => {{
        use soroban_sdk::IntoVal;

        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name: &stringify!($method).replace("try_", ""),
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        match call_result {
            std::result::Result::Ok(_) => {}
            std::result::Result::Err(e) => {
                panic!("Expected Ok result, got {:?} instead", e)
            }
        }
    }};
}

/// Invoke a `try_*` client method with auth mocked for `$caller` only, and assert it fails
/// authorization.
#[macro_export]
macro_rules! assert_invoke_auth_err {
    ( $caller:expr, $client:ident . $method:ident ( $($arg:expr),* $(,)? ) ) => {{
        use soroban_sdk::IntoVal;

        let call_result = $client
            .mock_auths(&[soroban_sdk::testutils::MockAuth {
                address: &$caller,
                invoke: &soroban_sdk::testutils::MockAuthInvoke {
                    contract: &$client.address,
                    fn_name: &stringify!($method).replace("try_", ""),
                    args: ($($arg.clone(),)*).into_val(&$client.env),
                    sub_invokes: &[],
                },
            }])
            .$method($($arg),*);

        match call_result {
            std::result::Result::Err(std::result::Result::Err(_)) => {}
            std::result::Result::Err(std::result::Result::Ok(e)) => {
                panic!("Expected auth error, got contract error {:?} instead", e)
            }
            std::result::Result::Ok(v) => {
                panic!("Expected auth error, got {:?} instead", v)
            }
        }
    }};
}
