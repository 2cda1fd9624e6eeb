// crates/cwmp-model/src/macros.rs

/// Declares one managed object: the struct, its `ManagedObject` impl and its
/// static `ObjectInfo`.
///
/// ```ignore
/// managed_object! {
///     /// Doc comment for the struct.
///     pub struct Hosts ("InternetGatewayDevice.LANDevice.{i}.Hosts.") as "Hosts" {
///         params {
///             host_number_of_entries: u32 => "HostNumberOfEntries";
///         }
///         tables {
///             host: Host => "Host" { num_entries_parameter: Some("HostNumberOfEntries") };
///         }
///     }
/// }
/// ```
///
/// The optional `{ field: value }` block after a parameter or table overrides
/// fields of the default `ParameterInfo` / `TableInfo`. Sections must appear in
/// the order `params`, `lists`, `objects`, `tables`, `unique`.
macro_rules! managed_object {
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($path:literal) as $xml:literal {
            $( params {
                $( $(#[$pmeta:meta])* $pfield:ident : $pty:ty => $pname:literal
                    $({ $($pk:ident : $pv:expr),* $(,)? })? ; )*
            } )?
            $( lists {
                $( $(#[$lmeta:meta])* $lfield:ident => $lname:literal
                    $({ $($lk:ident : $lv:expr),* $(,)? })? ; )*
            } )?
            $( objects {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty => $oname:literal ; )*
            } )?
            $( tables {
                $( $(#[$tmeta:meta])* $tfield:ident : $tty:ty => $tname:literal
                    $({ $($tk:ident : $tv:expr),* $(,)? })? ; )*
            } )?
            $( unique { $( [ $( $ukey:literal ),+ ] )* } )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename = $xml))]
        pub struct $name {
            $($(
                $(#[$pmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $pname, default, skip_serializing_if = "Option::is_none"))]
                pub $pfield: Option<$pty>,
            )*)?
            $($(
                $(#[$lmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $lname, default, skip_serializing_if = "crate::types::ParamList::is_empty"))]
                pub $lfield: $crate::types::ParamList,
            )*)?
            $($(
                $(#[$ometa])*
                #[cfg_attr(feature = "serde", serde(rename = $oname, default, skip_serializing_if = "Option::is_none"))]
                pub $ofield: Option<$oty>,
            )*)?
            $($(
                $(#[$tmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $tname, default, skip_serializing_if = "alloc::vec::Vec::is_empty"))]
                pub $tfield: alloc::vec::Vec<$tty>,
            )*)?
        }

        impl $crate::object::ManagedObject for $name {
            fn info(&self) -> &'static $crate::meta::ObjectInfo {
                <Self as $crate::object::ObjectType>::object_info()
            }

            fn parameter(
                &self,
                name: &str,
            ) -> Result<Option<$crate::value::ParameterValue>, $crate::error::ModelError> {
                match name {
                    $($( $pname => Ok(self
                        .$pfield
                        .as_ref()
                        .map(<$pty as $crate::object::ParamField>::to_value)), )*)?
                    $($( $lname => Ok(Some(
                        <$crate::types::ParamList as $crate::object::ParamField>::to_value(&self.$lfield),
                    )), )*)?
                    _ => Err($crate::error::ModelError::ParameterNotFound(
                        alloc::string::String::from(name),
                    )),
                }
            }

            #[allow(unused_variables)]
            fn set_parameter(
                &mut self,
                name: &str,
                value: $crate::value::ParameterValue,
            ) -> Result<(), $crate::error::ModelError> {
                match name {
                    $($( $pname => {
                        self.$pfield = Some(<$pty as $crate::object::ParamField>::from_value(value)?);
                        Ok(())
                    } )*)?
                    $($( $lname => {
                        self.$lfield =
                            <$crate::types::ParamList as $crate::object::ParamField>::from_value(value)?;
                        Ok(())
                    } )*)?
                    _ => Err($crate::error::ModelError::ParameterNotFound(
                        alloc::string::String::from(name),
                    )),
                }
            }

            fn child(
                &self,
                name: &str,
            ) -> Result<Option<&dyn $crate::object::ManagedObject>, $crate::error::ModelError> {
                match name {
                    $($( $oname => Ok(self
                        .$ofield
                        .as_ref()
                        .map(|c| c as &dyn $crate::object::ManagedObject)), )*)?
                    _ => Err($crate::error::ModelError::ObjectNotFound(
                        alloc::string::String::from(name),
                    )),
                }
            }

            fn child_mut(
                &mut self,
                name: &str,
            ) -> Result<&mut dyn $crate::object::ManagedObject, $crate::error::ModelError> {
                match name {
                    $($( $oname => Ok(self.$ofield.get_or_insert_with(Default::default)
                        as &mut dyn $crate::object::ManagedObject), )*)?
                    _ => Err($crate::error::ModelError::ObjectNotFound(
                        alloc::string::String::from(name),
                    )),
                }
            }

            fn instance_count(&self, table: &str) -> Result<usize, $crate::error::ModelError> {
                match table {
                    $($( $tname => Ok(self.$tfield.len()), )*)?
                    _ => Err($crate::error::ModelError::ObjectNotFound(
                        alloc::string::String::from(table),
                    )),
                }
            }

            #[allow(unused_variables)]
            fn instance(
                &self,
                table: &str,
                number: u32,
            ) -> Result<&dyn $crate::object::ManagedObject, $crate::error::ModelError> {
                match table {
                    $($( $tname => (number as usize)
                        .checked_sub(1)
                        .and_then(|i| self.$tfield.get(i))
                        .map(|row| row as &dyn $crate::object::ManagedObject)
                        .ok_or_else(|| $crate::error::ModelError::InstanceNotFound {
                            table: alloc::string::String::from(table),
                            instance: number,
                        }), )*)?
                    _ => Err($crate::error::ModelError::ObjectNotFound(
                        alloc::string::String::from(table),
                    )),
                }
            }

            #[allow(unused_variables)]
            fn instance_mut(
                &mut self,
                table: &str,
                number: u32,
            ) -> Result<&mut dyn $crate::object::ManagedObject, $crate::error::ModelError> {
                match table {
                    $($( $tname => (number as usize)
                        .checked_sub(1)
                        .and_then(|i| self.$tfield.get_mut(i))
                        .map(|row| row as &mut dyn $crate::object::ManagedObject)
                        .ok_or_else(|| $crate::error::ModelError::InstanceNotFound {
                            table: alloc::string::String::from(table),
                            instance: number,
                        }), )*)?
                    _ => Err($crate::error::ModelError::ObjectNotFound(
                        alloc::string::String::from(table),
                    )),
                }
            }

            fn add_instance(&mut self, table: &str) -> Result<u32, $crate::error::ModelError> {
                match table {
                    $($( $tname => {
                        self.$tfield.push(Default::default());
                        u32::try_from(self.$tfield.len()).map_err(|_| {
                            $crate::error::ModelError::ResourcesExceeded(
                                alloc::string::String::from(table),
                            )
                        })
                    } )*)?
                    _ => Err($crate::error::ModelError::ObjectNotFound(
                        alloc::string::String::from(table),
                    )),
                }
            }
        }

        impl $crate::object::ObjectType for $name {
            fn object_info() -> &'static $crate::meta::ObjectInfo {
                static INFO: $crate::meta::ObjectInfo = $crate::meta::ObjectInfo {
                    name: $path,
                    xml_name: $xml,
                    parameters: &[
                        $($( $crate::meta::ParameterInfo {
                            $($( $pk: $pv, )*)?
                            ..$crate::meta::ParameterInfo::new(
                                $pname,
                                <$pty as $crate::object::ParamField>::TYPE,
                            )
                        }, )*)?
                        $($( $crate::meta::ParameterInfo {
                            $($( $lk: $lv, )*)?
                            ..$crate::meta::ParameterInfo::list($lname)
                        }, )*)?
                    ],
                    objects: &[
                        $($( $crate::meta::ChildInfo::new(
                            $oname,
                            <$oty as $crate::object::ObjectType>::object_info,
                        ), )*)?
                    ],
                    tables: &[
                        $($( $crate::meta::TableInfo {
                            $($( $tk: $tv, )*)?
                            ..$crate::meta::TableInfo::new(
                                $tname,
                                <$tty as $crate::object::ObjectType>::object_info,
                            )
                        }, )*)?
                    ],
                    unique_keys: &[ $($( &[ $( $ukey ),+ ], )*)? ],
                };
                &INFO
            }
        }
    };
}

pub(crate) use managed_object;
